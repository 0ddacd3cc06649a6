//! Application-level error types.

use thiserror::Error;

use crate::ui::nav::PageKey;

/// Errors that can occur within the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Navigation was asked for a key with no page in the registry.
    ///
    /// The registry is built once at startup from the closed [`PageKey`] set,
    /// so this can only fire if registration is incomplete. It must surface
    /// as an error rather than a silent no-op.
    #[error("no page registered for key `{0}`")]
    InvalidPageKey(PageKey),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON (de)serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("trash error: {0}")]
    Trash(#[from] trash::Error),
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
