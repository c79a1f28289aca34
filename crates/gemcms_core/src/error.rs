//! Error types for draft validation.

use thiserror::Error;

/// Pre-save checks that block persisting a draft.
///
/// A failing draft produces no partial write; the in-memory editor state
/// is left untouched so the author can fix the field and retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("o título é obrigatório")]
    MissingTitle,

    #[error("a imagem de capa é obrigatória")]
    MissingCoverImage,
}
