//! Core domain library for gemcms (markup engine, editor session, models).

/// Configuration loading and defaults.
pub mod config;
/// Canonical editor defaults.
pub mod constants;
/// Single-article editing session.
pub mod editor;
/// Draft validation errors.
pub mod error;
/// Session-unique id generation.
pub mod ident;
/// Buffer ↔ HTML markup engine.
pub mod markup;
/// Editor and collaborator data models.
pub mod models;
/// URL/text normalization helpers.
pub mod text;

pub use config::Config;
pub use editor::{ArticleEditor, ProductPicker, Selection};
pub use error::DraftError;
