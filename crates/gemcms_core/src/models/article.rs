use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Lifecycle states as stored by the backend (numeric wire form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ArticleStatus {
    Archived,
    Published,
    Canceled,
    Deleted,
}

impl From<ArticleStatus> for u8 {
    fn from(status: ArticleStatus) -> Self {
        match status {
            ArticleStatus::Archived => 1,
            ArticleStatus::Published => 2,
            ArticleStatus::Canceled => 3,
            ArticleStatus::Deleted => 4,
        }
    }
}

impl TryFrom<u8> for ArticleStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Archived),
            2 => Ok(Self::Published),
            3 => Ok(Self::Canceled),
            4 => Ok(Self::Deleted),
            other => Err(format!("unknown article status: {other}")),
        }
    }
}

/// In-editor state of an article before encoding.
///
/// `buffer` is the plain-text body the author edits, interleaving prose
/// with link markers and entity tokens.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: String,
    pub buffer: String,
    pub cover_image_urls: Vec<String>,
    pub category_id: Option<u64>,
    pub redirect_url: Option<String>,
    pub status: ArticleStatus,
}

impl Default for ArticleDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            buffer: String::new(),
            cover_image_urls: Vec::new(),
            category_id: None,
            redirect_url: None,
            status: ArticleStatus::Archived,
        }
    }
}

impl ArticleDraft {
    /// Pre-save checks. A failing draft blocks the save action entirely.
    ///
    /// # Returns
    /// `Ok(())` when the draft carries a title and a cover image.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if !self
            .cover_image_urls
            .iter()
            .any(|url| !url.trim().is_empty())
        {
            return Err(DraftError::MissingCoverImage);
        }
        Ok(())
    }
}

/// Persisted article as returned by the content backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub body_html: String,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub cover_image_urls: Vec<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    pub status: ArticleStatus,
    #[serde(default)]
    pub likes: Option<Vec<String>>,
    #[serde(default)]
    pub views: Option<Vec<String>>,
}

impl Article {
    /// Like count, tolerating records that predate engagement tracking.
    pub fn like_count(&self) -> usize {
        self.likes.as_ref().map_or(0, Vec::len)
    }

    /// View count, tolerating records that predate engagement tracking.
    pub fn view_count(&self) -> usize {
        self.views.as_ref().map_or(0, Vec::len)
    }
}

/// Body for article create/update requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    pub title: String,
    pub body_html: String,
    pub category_id: Option<u64>,
    pub cover_image_urls: Vec<String>,
    pub redirect_url: Option<String>,
    pub status: ArticleStatus,
}

/// Paged, status-filtered article search request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSearchQuery {
    pub status: ArticleStatus,
    pub search_term: String,
    pub page_number: u32,
    pub page_size: u32,
}

/// One page of a listing response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}
