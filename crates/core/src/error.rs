//! Error taxonomy of a search call
//!
//! Every way a call can fail maps to exactly one variant. The client never
//! retries on its own; [`SearchError::is_retryable`] is advice for callers.

use thiserror::Error;

pub const MSG_LIMIT_NEGATIVE: &str = "limit must be >= 0";
pub const MSG_OFFSET_NEGATIVE: &str = "offset must be >= 0";
pub const MSG_BAD_ACCESS_TOKEN: &str = "Bad AccessToken";
pub const MSG_FATAL_SERVER: &str = "SearchServer fatal error";
pub const MSG_UNPACK_RESULT: &str = "cant unpack result json";
pub const MSG_UNPACK_ERROR: &str = "cant unpack error json";

/// Connection-level failure, before any HTTP status was received
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("timeout for {0}")]
    Timeout(String),

    #[error("unknown error {0}")]
    Other(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Local precondition failure or a server-reported invalid order field
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Auth(String),

    #[error("unknown bad request error: {0}")]
    UnknownBadRequest(String),

    /// Body did not match the success array or the error envelope
    #[error("{what}: {detail}")]
    Decode { what: &'static str, detail: String },

    #[error("{0}")]
    FatalServer(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SearchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, SearchError::Transport(TransportError::Timeout(_)))
    }

    /// Whether repeating the same request unchanged could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SearchError::Transport(_) | SearchError::FatalServer(_)
        )
    }
}
