//! Error types for the few operations that can fail.

/// Errors raised by `plainval`.
///
/// Almost every helper is total and reports "not there" as `None` or `false`.
/// These variants cover the handful of cases where there is no sensible value
/// to return.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("The path is invalid {path:?}: {message}")]
    PathInvalid { path: String, message: String },

    #[error("Invalid hex group {group:?} at character {position}")]
    InvalidHex { position: usize, group: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    pub(crate) fn empty_path(operation: &str) -> Self {
        Error::InvalidArgument {
            message: format!("{} requires a non-empty path", operation),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
