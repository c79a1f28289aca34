//! Data models for the editor and the collaborator API.

/// Article draft, status lifecycle, and wire shapes.
pub mod article;
/// Blog category shape.
pub mod category;
/// Storefront product shape.
pub mod product;

pub use article::{Article, ArticleDraft, ArticlePayload, ArticleSearchQuery, ArticleStatus, Page};
pub use category::Category;
pub use product::Product;
