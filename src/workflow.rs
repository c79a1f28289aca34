//! Load, save, and status flows for the article editor.

use gemcms_client::{ApiClient, ClientError};
use gemcms_core::editor::ArticleEditor;
use gemcms_core::error::DraftError;
use gemcms_core::models::{Article, ArticleSearchQuery, ArticleStatus, Category, Page};
use gemcms_core::Config;
use thiserror::Error;

/// Failure of an admin workflow.
///
/// Validation blocks before any network call, so a failing draft never
/// produces a partial save. Backend errors leave editor state untouched
/// for retry.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Invalid(#[from] DraftError),

    #[error("o nome da categoria é obrigatório")]
    EmptyCategoryName,

    #[error(transparent)]
    Backend(#[from] ClientError),
}

/// Admin-side article workflows over the collaborator API.
#[derive(Debug, Clone)]
pub struct BlogAdmin {
    client: ApiClient,
    page_size: u32,
}

impl BlogAdmin {
    pub fn new(client: ApiClient, config: &Config) -> Self {
        Self {
            client,
            page_size: config.page_size,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Load an article into a fresh editing session.
    pub async fn open_article(&self, id: u64) -> Result<ArticleEditor, WorkflowError> {
        let article = self.client.get_article(id).await?;
        Ok(ArticleEditor::open(&article))
    }

    /// One page of the admin listing for a status tab.
    pub async fn list_articles(
        &self,
        status: ArticleStatus,
        term: &str,
        page: u32,
    ) -> Result<Page<Article>, WorkflowError> {
        let query = ArticleSearchQuery {
            status,
            search_term: term.to_string(),
            page_number: page.max(1),
            page_size: self.page_size,
        };
        Ok(self.client.search_articles(&query).await?)
    }

    /// Validate, encode, and persist a session.
    ///
    /// Creates a new article when `existing_id` is `None`, updates in
    /// place otherwise.
    ///
    /// # Returns
    /// The persisted article as the backend stored it.
    pub async fn save_article(
        &self,
        editor: &ArticleEditor,
        existing_id: Option<u64>,
    ) -> Result<Article, WorkflowError> {
        let payload = editor.to_payload()?;
        let saved = match existing_id {
            Some(id) => self.client.update_article(id, &payload).await?,
            None => self.client.create_article(&payload).await?,
        };
        tracing::info!(id = saved.id, "article saved");
        Ok(saved)
    }

    /// Move an article through its lifecycle.
    pub async fn change_status(
        &self,
        id: u64,
        status: ArticleStatus,
    ) -> Result<(), WorkflowError> {
        Ok(self.client.update_article_status(id, status).await?)
    }

    /// Deletion is a status change; records are never hard-removed here.
    pub async fn delete_article(&self, id: u64) -> Result<(), WorkflowError> {
        self.change_status(id, ArticleStatus::Deleted).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, WorkflowError> {
        Ok(self.client.list_categories().await?)
    }

    /// Create a category; blank names are rejected before the call.
    pub async fn create_category(&self, name: &str) -> Result<Category, WorkflowError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkflowError::EmptyCategoryName);
        }
        Ok(self.client.create_category(name).await?)
    }

    pub async fn delete_category(&self, id: u64) -> Result<(), WorkflowError> {
        Ok(self.client.delete_category(id).await?)
    }

    /// Upload a cover image and attach it to the session, replacing any
    /// previous cover.
    ///
    /// # Returns
    /// The public URL the backend assigned.
    pub async fn upload_cover(
        &self,
        editor: &mut ArticleEditor,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, WorkflowError> {
        let url = self.client.upload_post_image(file_name, bytes).await?;
        editor.set_cover_image(url.clone());
        Ok(url)
    }
}
