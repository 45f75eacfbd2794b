use crate::DocumentId;
use thiserror::Error;

pub type Result<T, E = SearchError> = std::result::Result<T, E>;

/// Errors surfaced by the search engine. Every check runs before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Malformed input: control characters, a bad document id, or broken minus-term syntax.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("document {0} not found")]
    DocumentNotFound(DocumentId),
    #[error("index {index} out of range for {len} documents")]
    OutOfRange { index: usize, len: usize },
}

impl SearchError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SearchError::InvalidArgument(_))
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SearchError::InvalidArgument(msg.into())
    }
}
