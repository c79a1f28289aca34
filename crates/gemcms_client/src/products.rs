//! Product keyword search over the storefront catalog.

use gemcms_core::models::Product;
use serde::Deserialize;

use crate::{ApiClient, ClientError};

#[derive(Debug, Deserialize)]
struct ProductSearchResponse {
    #[serde(default)]
    items: Vec<Product>,
}

impl ApiClient {
    /// Search products by keyword.
    ///
    /// # Returns
    /// Matching products, empty when the backend has none.
    pub async fn search_products(&self, term: &str) -> Result<Vec<Product>, ClientError> {
        let response = self
            .http()
            .get(self.url("ecommerce/products/search"))
            .query(&[("searchTerm", term)])
            .send()
            .await?;
        let parsed: ProductSearchResponse = Self::check(response).await?.json().await?;
        Ok(parsed.items)
    }
}
