use thiserror::Error;

/// Reasons a list view could not be mounted
#[derive(Debug, Error)]
pub enum ListViewError {
    #[error("no browser window or document available")]
    NoDocument,
    #[error("required element `{0}` not found")]
    MissingElement(String),
    #[error("invalid list view configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
