//! Admin editor for the blog surface: markup engine, backend client, and
//! the workflows tying them together.

/// Load/save/status workflows.
pub mod workflow;

pub use gemcms_client::{ApiClient, ClientError, ProductSearch, SearchOutcome};
pub use gemcms_core::{ArticleEditor, Config, DraftError, ProductPicker};
pub use workflow::{BlogAdmin, WorkflowError};
