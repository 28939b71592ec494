use thiserror::Error;

use super::models::ArticleId;
use super::models::WidgetId;

/// Error type for widget and article id validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentIdError {
    #[error("{field} must be positive, got {id}")]
    NotPositive { field: &'static str, id: i64 },
}

/// Error type for WidgetDescription validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("Description is empty")]
    Empty,

    #[error("Description too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error type for all content operations
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    #[error("Invalid id: {0}")]
    InvalidId(#[from] ContentIdError),

    #[error("Invalid description: {0}")]
    InvalidDescription(#[from] DescriptionError),

    #[error("User {user_id} is not allowed to {action}")]
    Forbidden { user_id: i64, action: &'static str },

    #[error("Widget not found: {0}")]
    WidgetNotFound(WidgetId),

    #[error("Article not found: {0}")]
    ArticleNotFound(ArticleId),

    #[error("{item} is not attached to user {user_id}")]
    NotAttached { user_id: i64, item: String },

    // Infrastructure errors
    #[error("Database error during {op}: {message}")]
    Database { op: &'static str, message: String },
}

impl ContentError {
    pub fn database(op: &'static str, err: impl std::fmt::Display) -> Self {
        ContentError::Database {
            op,
            message: err.to_string(),
        }
    }
}
