use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Catalog responded with status {0}")]
    Status(u16),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid page cursor: {0}")]
    InvalidCursor(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
