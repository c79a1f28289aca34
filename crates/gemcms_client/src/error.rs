//! Error types for collaborator calls.

use thiserror::Error;

/// Failure of a call to the content backend.
///
/// Collaborator errors never mutate in-memory editor state; callers
/// surface the message and let the author retry without losing work.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
}
