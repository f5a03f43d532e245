//! Common transport-layer types shared between the image server and the frontend.
//! These structs mirror the server's JSON payloads so the frontend can
//! deserialize responses without duplicating shapes.

mod catalog;
mod histogram;
pub mod routes;

pub use catalog::ImageCatalog;
pub use histogram::{Histogram, HistogramError, HistogramOutcome, HistogramReport, HistogramResponse};
