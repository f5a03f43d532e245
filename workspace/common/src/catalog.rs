use serde::{Deserialize, Serialize};

/// Body of `GET /info`: the classifier models and the image files the
/// server can serve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageCatalog {
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl ImageCatalog {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
