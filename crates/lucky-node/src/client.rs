//! JSON-RPC client for a Luckycoin Core-style node.
//!
//! One explicitly constructed client object carries the HTTP connection
//! pool, credentials, and timeout; it is passed by reference wherever node
//! access is needed. There is no process-wide connection state.

use std::time::Duration;

use lucky_primitives::chainhash::Hash;
use lucky_script::Script;
use lucky_transaction::Utxo;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::NodeError;
use crate::types::{NodeConfig, RpcRequest, RpcResponse, Unspent};

/// Number of satoshis in one coin.
const SATOSHIS_PER_COIN: u64 = 100_000_000;

/// Maximum number of fractional digits an amount may carry.
const COIN_DECIMALS: usize = 8;

/// Upper confirmation bound passed to `listunspent`.
const MAX_CONFIRMATIONS: u32 = 9_999_999;

/// HTTP client for the node's JSON-RPC interface.
#[derive(Debug, Clone)]
pub struct NodeClient {
    /// Client configuration.
    config: NodeConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl NodeClient {
    /// Create a new node client with the given configuration.
    ///
    /// # Arguments
    /// * `config` - Endpoint, credentials, and timeout.
    ///
    /// # Returns
    /// `Ok(NodeClient)`, or a transport error if the HTTP client cannot be
    /// constructed.
    pub fn new(config: NodeConfig) -> Result<Self, NodeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Query the spendable outputs of an address.
    ///
    /// Calls `listunspent(min_conf, 9999999, [address])` and converts each
    /// row's decimal amount to integer satoshis by exact scaling.
    ///
    /// # Arguments
    /// * `address` - The address whose outputs to list.
    /// * `min_conf` - Minimum number of confirmations (1 for spending).
    ///
    /// # Returns
    /// The spendable outputs in the node's order, or a `NodeError` on
    /// transport, RPC, or conversion failure. Errors are returned to the
    /// caller without local retry.
    pub async fn list_unspent(
        &self,
        address: &str,
        min_conf: u32,
    ) -> Result<Vec<Utxo>, NodeError> {
        let params = serde_json::json!([min_conf, MAX_CONFIRMATIONS, [address]]);
        let rows: Vec<Unspent> = self.call("listunspent", params).await?;

        let mut utxos = Vec::with_capacity(rows.len());
        for row in rows {
            let txid = Hash::from_hex(&row.txid)
                .map_err(|e| NodeError::InvalidResponse(format!("txid '{}': {}", row.txid, e)))?;
            let locking_script = Script::from_hex(&row.script_pub_key).map_err(|e| {
                NodeError::InvalidResponse(format!("scriptPubKey for {}: {}", row.txid, e))
            })?;
            let satoshis = coins_to_satoshis(&row.amount.to_string())?;
            utxos.push(Utxo {
                txid,
                vout: row.vout,
                satoshis,
                locking_script,
            });
        }

        debug!(address, count = utxos.len(), "fetched unspent outputs");
        Ok(utxos)
    }

    /// Broadcast a fully serialized transaction.
    ///
    /// Calls `sendrawtransaction(hex)`. A node error object becomes
    /// `NodeError::Rejected` carrying the node's reason verbatim; that
    /// outcome is terminal for this transaction and is never retried here.
    ///
    /// # Arguments
    /// * `raw_tx_hex` - The hex-encoded final transaction.
    ///
    /// # Returns
    /// The transaction ID assigned by the network.
    pub async fn send_raw_transaction(&self, raw_tx_hex: &str) -> Result<String, NodeError> {
        let params = serde_json::json!([raw_tx_hex]);
        match self.call::<String>("sendrawtransaction", params).await {
            Ok(txid) => {
                info!(%txid, "transaction accepted by node");
                Ok(txid)
            }
            Err(NodeError::Rpc { code, message }) => Err(NodeError::Rejected { code, message }),
            Err(e) => Err(e),
        }
    }

    /// Perform a JSON-RPC call and unwrap the response envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: serde_json::Value,
    ) -> Result<T, NodeError> {
        let request = RpcRequest {
            jsonrpc: "1.0",
            id: "lucky-sdk",
            method,
            params,
        };

        debug!(method, "node RPC call");
        let resp = self
            .client
            .post(&self.config.url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(&request)
            .send()
            .await?;

        // The node reports RPC-level failures in the JSON body, usually
        // alongside a non-2xx status; the body is authoritative.
        let envelope: RpcResponse<T> = resp.json().await?;
        if let Some(err) = envelope.error {
            return Err(NodeError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        envelope.result.ok_or(NodeError::MissingResult)
    }
}

/// Convert a decimal coin amount to integer satoshis by exact scaling.
///
/// The input is the node's decimal literal (e.g. `"1.02250000"`). The
/// value is scaled by 10^8 using integer arithmetic on the digit strings;
/// no binary floating point is involved, so no satoshi is ever lost to
/// rounding. More than 8 fractional digits cannot be represented and are
/// rejected rather than rounded.
///
/// # Arguments
/// * `amount` - The decimal amount string.
///
/// # Returns
/// The amount in satoshis, or `NodeError::InvalidAmount`.
pub fn coins_to_satoshis(amount: &str) -> Result<u64, NodeError> {
    let invalid = || NodeError::InvalidAmount(format!("'{}' is not a valid coin amount", amount));

    let (int_part, frac_part) = match amount.split_once('.') {
        Some((i, f)) => (i, f),
        None => (amount, ""),
    };

    if int_part.is_empty()
        || !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    if frac_part.len() > COIN_DECIMALS {
        return Err(NodeError::InvalidAmount(format!(
            "'{}' has more than {} fractional digits",
            amount, COIN_DECIMALS
        )));
    }

    let whole: u64 = int_part.parse().map_err(|_| invalid())?;

    // Right-pad the fractional digits to exactly 8 places.
    let mut frac: u64 = 0;
    if !frac_part.is_empty() {
        frac = frac_part.parse().map_err(|_| invalid())?;
        frac *= 10u64.pow((COIN_DECIMALS - frac_part.len()) as u32);
    }

    whole
        .checked_mul(SATOSHIS_PER_COIN)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(|| NodeError::InvalidAmount(format!("'{}' overflows u64 satoshis", amount)))
}
