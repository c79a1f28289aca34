//! Article endpoints: paged search, create, update, status changes.

use gemcms_core::models::{Article, ArticlePayload, ArticleSearchQuery, ArticleStatus, Page};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// Paged, status-filtered article search for the admin listing.
    pub async fn search_articles(
        &self,
        query: &ArticleSearchQuery,
    ) -> Result<Page<Article>, ClientError> {
        let response = self
            .http()
            .post(self.url("blog/posts/search"))
            .json(query)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Fetch one article by id.
    pub async fn get_article(&self, id: u64) -> Result<Article, ClientError> {
        let response = self
            .http()
            .get(self.url(&format!("blog/posts/{id}")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Create an article.
    pub async fn create_article(&self, payload: &ArticlePayload) -> Result<Article, ClientError> {
        tracing::debug!(title = %payload.title, "creating article");
        let response = self
            .http()
            .post(self.url("blog/posts"))
            .json(payload)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Update an article in place.
    pub async fn update_article(
        &self,
        id: u64,
        payload: &ArticlePayload,
    ) -> Result<Article, ClientError> {
        tracing::debug!(id, "updating article");
        let response = self
            .http()
            .put(self.url(&format!("blog/posts/{id}")))
            .json(payload)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Move an article through its lifecycle (archive, publish, cancel,
    /// delete).
    pub async fn update_article_status(
        &self,
        id: u64,
        status: ArticleStatus,
    ) -> Result<(), ClientError> {
        tracing::debug!(id, status = u8::from(status), "changing article status");
        let response = self
            .http()
            .patch(self.url(&format!("blog/posts/{id}/status")))
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
