//! Endpoint paths served by the image server.
//!
//! Builders return paths relative to the server root; callers prepend a
//! base URL when the API lives on another origin.

pub const HISTOGRAM_JSON_PATH: &str = "/histogram/json";
pub const HISTOGRAM_IMAGE_PATH: &str = "/histogram/image";
pub const INFO_PATH: &str = "/info";

/// Where the server exposes the raw source images.
pub const DEFAULT_STATIC_IMAGE_PREFIX: &str = "/static/imagenet_subset";

/// `GET /histogram/json?image_id=<id>`
pub fn histogram_json(image_id: &str) -> String {
    format!("{}?image_id={}", HISTOGRAM_JSON_PATH, urlencoding::encode(image_id))
}

/// `GET /histogram/image?image_id=<id>`
pub fn histogram_image(image_id: &str) -> String {
    format!("{}?image_id={}", HISTOGRAM_IMAGE_PATH, urlencoding::encode(image_id))
}

/// Static asset path of a source image, e.g. `/static/imagenet_subset/<id>`.
pub fn static_image(prefix: &str, image_id: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        urlencoding::encode(image_id)
    )
}
