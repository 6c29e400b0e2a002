//! Error types for waypoint-core

use thiserror::Error;

/// Result type alias for waypoint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for route resolution and navigation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Requested path matches no route and no fallback view is set
    #[error("Route not found: {path}")]
    RouteNotFound { path: String },

    /// A route table path is not a plain absolute path
    #[error("Invalid route path: {0:?}")]
    InvalidPath(String),

    /// `go`/`back`/`forward` moved past either end of history
    #[error("History out of range: cannot move {delta} entries")]
    HistoryOutOfRange { delta: isize },

    /// History backend failure (browser only)
    #[error("History error: {0}")]
    History(String),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::RouteNotFound { .. })
    }
}
