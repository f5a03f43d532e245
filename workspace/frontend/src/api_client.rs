pub mod catalog;
pub mod histogram;

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use crate::settings;

fn api_url(path: &str) -> String {
    settings::get_settings().api_url(path)
}

async fn send_get(path: &str) -> Result<Response, String> {
    let url = api_url(path);
    log::debug!("GET request to: {}", url);

    Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Network error: {}", e);
            log::error!("GET {} - {}", path, error_msg);
            error_msg
        })
}

async fn parse_json<T>(path: &str, response: Response) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    log::trace!("GET {} - Response received, parsing JSON", path);
    response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", path, error_msg);
        error_msg
    })
}

/// Common GET request handler; any non-2xx status is an error.
pub async fn get<T>(path: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let response = send_get(path).await?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", path, error_msg);
        return Err(error_msg);
    }

    let data = parse_json(path, response).await?;
    log::info!("GET {} - Success", path);
    Ok(data)
}

/// GET for endpoints that describe their own failures in the JSON body.
pub async fn get_payload<T>(path: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let response = send_get(path).await?;
    let status = response.status();
    let ok = response.ok();

    let parsed = parse_json(path, response).await;
    let result = resolve_payload(ok, status, parsed);
    match &result {
        Ok(_) if ok => log::info!("GET {} - Success", path),
        Ok(_) => log::warn!("GET {} - Non-OK response with payload: {}", path, status),
        Err(e) => log::error!("GET {} - {}", path, e),
    }
    result
}

/// The body wins whatever the status; the status only becomes the error
/// when the body could not be decoded.
fn resolve_payload<T>(ok: bool, status: u16, parsed: Result<T, String>) -> Result<T, String> {
    match parsed {
        Ok(data) => Ok(data),
        Err(_) if !ok => Err(format!("HTTP error: {}", status)),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::HistogramResponse;

    fn decode(body: &str) -> Result<HistogramResponse, String> {
        serde_json::from_str(body).map_err(|e| format!("Failed to parse response: {}", e))
    }

    #[test]
    fn test_error_body_on_bad_status_is_returned() {
        let result = resolve_payload(false, 404, decode(r#"{"error": "Image not found"}"#));
        assert_eq!(
            result.unwrap().error.as_deref(),
            Some("Image not found")
        );
    }

    #[test]
    fn test_undecodable_body_on_bad_status_reports_status() {
        let result = resolve_payload(false, 502, decode("<html>Bad Gateway</html>"));
        assert_eq!(result.unwrap_err(), "HTTP error: 502");
    }

    #[test]
    fn test_undecodable_body_on_ok_status_reports_parse_failure() {
        let result = resolve_payload(true, 200, decode("not json"));
        assert!(result.unwrap_err().starts_with("Failed to parse response"));
    }

    #[test]
    fn test_ok_body_passes_through() {
        let result = resolve_payload(true, 200, decode(r#"{"image_id": "cat.png"}"#));
        assert_eq!(result.unwrap().image_id.as_deref(), Some("cat.png"));
    }
}
