use thiserror::Error;

/// Failure reported by a [`QuestionStore`](super::store::QuestionStore) or
/// [`CategoryCatalog`](super::store::CategoryCatalog) collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Engine-level failure, classified at the point of resolution.
#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unprocessable: {0}")]
    Unprocessable(String),
    #[error("internal server error: {0}")]
    Internal(String),
}

pub type TriviaResult<T> = Result<T, TriviaError>;

/// Stable, machine-readable failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Unprocessable,
    InternalError,
}

impl ErrorKind {
    /// HTTP status the handler layer should answer with.
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::NotFound      => 404,
            ErrorKind::BadRequest    => 400,
            ErrorKind::Unprocessable => 422,
            ErrorKind::InternalError => 500,
        }
    }

    /// Fixed public message. Details stay in logs.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NotFound      => "resource not found",
            ErrorKind::BadRequest    => "bad request",
            ErrorKind::Unprocessable => "unprocessable",
            ErrorKind::InternalError => "internal server error",
        }
    }
}

impl TriviaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::NotFound(_)      => ErrorKind::NotFound,
            TriviaError::BadRequest(_)    => ErrorKind::BadRequest,
            TriviaError::Unprocessable(_) => ErrorKind::Unprocessable,
            TriviaError::Internal(_)      => ErrorKind::InternalError,
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        TriviaError::NotFound(detail.into())
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        TriviaError::BadRequest(detail.into())
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        TriviaError::Unprocessable(detail.into())
    }

    /// Wrap a store failure that happened while reading.
    pub fn internal(err: StoreError) -> Self {
        TriviaError::Internal(err.to_string())
    }
}
