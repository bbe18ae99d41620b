//! Error types for node RPC operations.

/// Errors that can occur when interacting with the node.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// HTTP transport failed (connection, TLS, or timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to serialize or deserialize RPC data.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The node answered a query with an error object.
    #[error("node RPC error ({code}): {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message from the node.
        message: String,
    },

    /// The node refused a broadcast transaction. Terminal for that
    /// transaction; the caller must rebuild before retrying.
    #[error("transaction rejected by network ({code}): {message}")]
    Rejected {
        /// JSON-RPC error code.
        code: i64,
        /// The node's rejection reason, verbatim.
        message: String,
    },

    /// The node reported an amount that cannot be represented exactly
    /// in satoshis.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The node returned neither a result nor an error.
    #[error("node returned no result")]
    MissingResult,

    /// A field in the node's response failed to parse.
    #[error("invalid response field: {0}")]
    InvalidResponse(String),
}
