use serde::{Deserialize, Serialize};

/// Blog category as exposed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}
