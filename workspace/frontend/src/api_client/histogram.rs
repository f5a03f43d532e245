use common::{routes, HistogramResponse};
use crate::api_client;
use crate::submit::{HistogramSource, Selection};

/// Get the histogram payload for one image
pub async fn get_histogram(image_id: &str) -> Result<HistogramResponse, String> {
    log::trace!("Fetching histogram for image: {}", image_id);
    let result = api_client::get_payload::<HistogramResponse>(&routes::histogram_json(image_id)).await;

    match &result {
        Ok(response) if response.error.is_some() => {
            log::warn!("Server rejected histogram for {}: {:?}", image_id, response.error)
        }
        Ok(_) => log::info!("Fetched histogram for image: {}", image_id),
        Err(e) => log::error!("Failed to fetch histogram: {}", e),
    }

    result
}

/// [`HistogramSource`] backed by the HTTP API.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpHistogramSource;

impl HistogramSource for HttpHistogramSource {
    async fn fetch_histogram(&self, selection: &Selection) -> Result<HistogramResponse, String> {
        get_histogram(selection.as_str()).await
    }
}
