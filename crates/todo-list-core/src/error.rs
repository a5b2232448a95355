use thiserror::Error;

/// Result type for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;

/// Errors raised by [`crate::TaskHistory`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    /// `undo` was called before any state was recorded.
    #[error("no history recorded")]
    Empty,
}
