use serde::{Deserialize, Serialize};

/// Storefront product as returned by the keyword search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Price in BRL.
    pub value: f64,
    #[serde(default)]
    pub media_urls: Vec<String>,
}
