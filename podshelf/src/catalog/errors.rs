use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum CatalogError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Serde error: {0}")]
    Serde(String),

    /// More pages remained after `max_pages` requests
    #[error("Pagination limit of {max_pages} pages exceeded")]
    PaginationLimitExceeded { max_pages: usize },

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
