use thiserror::Error;

/// Errors surfaced by the booking and auth use cases.
///
/// A missing booking or an unknown roster email is not an error: those come
/// back as `None` from the use cases.
#[derive(Error, Debug)]
pub enum AppError {
    /// The store could not be reached or a write could not be committed. Retryable.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The roster source is unreadable or malformed. Needs an operator to fix the file.
    #[error("Roster format error: {0}")]
    RosterFormat(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Forbidden")]
    Forbidden,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    StorageUnavailable,
    RosterFormat,
    InvalidCredentials,
    Forbidden,
    InvalidInput,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::StorageUnavailable => "STORAGE_UNAVAILABLE",
            ErrorCode::RosterFormat => "ROSTER_FORMAT_ERROR",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::StorageUnavailable(_) => ErrorCode::StorageUnavailable,
            AppError::RosterFormat(_) => ErrorCode::RosterFormat,
            AppError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AppError::Forbidden => ErrorCode::Forbidden,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Whether the caller may retry the same operation unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::StorageUnavailable(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
