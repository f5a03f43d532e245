use common::routes::INFO_PATH;
use common::ImageCatalog;
use crate::api_client;

/// Get the images (and models) the server knows about
pub async fn get_image_catalog() -> Result<ImageCatalog, String> {
    log::trace!("Fetching image catalog");
    let result = api_client::get::<ImageCatalog>(INFO_PATH).await;
    match &result {
        Ok(catalog) => log::info!("Fetched catalog with {} images", catalog.images.len()),
        Err(e) => log::error!("Failed to fetch image catalog: {}", e),
    }
    result
}
