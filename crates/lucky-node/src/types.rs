//! Node RPC data types: configuration, request/response envelopes, and the
//! `listunspent` row shape.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a [`NodeClient`](crate::NodeClient).
///
/// Transport and credential values are supplied by the caller; this crate
/// never reads configuration files.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Base URL of the node's RPC endpoint (e.g. `http://127.0.0.1:9918`).
    pub url: String,
    /// RPC username for basic auth.
    pub username: String,
    /// RPC password for basic auth.
    pub password: String,
    /// Request timeout in seconds. Expiry surfaces as a transport error.
    pub timeout_secs: u64,
}

impl NodeConfig {
    /// Create a configuration with the default timeout.
    ///
    /// # Arguments
    /// * `url` - Base URL of the RPC endpoint.
    /// * `username` - RPC username.
    /// * `password` - RPC password.
    ///
    /// # Returns
    /// A `NodeConfig` with a 30-second timeout.
    pub fn new(url: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        NodeConfig {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// A JSON-RPC 1.0 request envelope.
#[derive(Debug, Serialize)]
pub struct RpcRequest {
    /// Protocol version marker.
    pub jsonrpc: &'static str,
    /// Request identifier echoed back by the node.
    pub id: &'static str,
    /// Method name (e.g. `listunspent`).
    pub method: &'static str,
    /// Positional parameters.
    pub params: serde_json::Value,
}

/// A JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RpcResponse<T> {
    /// The result payload, absent on error.
    #[serde(default)]
    pub result: Option<T>,
    /// The error object, absent on success.
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// The error object of a failed JSON-RPC call.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    /// Numeric error code.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
}

/// One row of a `listunspent` response.
///
/// The `amount` is kept as a raw JSON number so the decimal digits reach
/// the satoshi scaler untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct Unspent {
    /// Transaction ID in display order.
    pub txid: String,
    /// Output index within the transaction.
    pub vout: u32,
    /// Amount in whole coins, as the node's decimal literal.
    pub amount: serde_json::Number,
    /// Hex-encoded locking script of the output.
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: String,
    /// Number of confirmations, when reported.
    #[serde(default)]
    pub confirmations: Option<u64>,
}
