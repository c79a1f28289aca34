//! Category endpoints.

use gemcms_core::models::Category;

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// List every blog category.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        let response = self
            .http()
            .get(self.url("blog/categories"))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Create a category.
    pub async fn create_category(&self, name: &str) -> Result<Category, ClientError> {
        let response = self
            .http()
            .post(self.url("blog/categories"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Delete a category by id.
    pub async fn delete_category(&self, id: u64) -> Result<(), ClientError> {
        let response = self
            .http()
            .delete(self.url(&format!("blog/categories/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
