//! The payout wallet: a single spending key, a funding address, and the
//! sequential pipeline that turns a payout request into a broadcast
//! transaction.
//!
//! The pipeline is strictly ordered per call: decode recipient, fetch
//! UTXOs, select and build, sign input by input, serialize once, broadcast.
//! No step starts before the previous step's result is available, and a
//! failure at any step returns before anything reaches the network.
//! UTXOs are not reserved between calls; a concurrent external spend of
//! the funding address surfaces as a broadcast rejection.

use lucky_node::NodeClient;
use lucky_primitives::ec::PrivateKey;
use lucky_script::{Address, Network};
use lucky_transaction::template::p2pkh;
use lucky_transaction::{build_payment, DevFee, Payment};
use tracing::{debug, info};

use crate::WalletError;

/// Minimum confirmations for an output to be spendable.
const SPENDABLE_MIN_CONF: u32 = 1;

/// Flat network fee applied to every payout, in satoshis (0.0225 coins).
pub const DEFAULT_FEE_SATOSHIS: u64 = 2_250_000;

/// Dev-fee rate in basis points (1%).
pub const DEFAULT_DEV_FEE_BASIS_POINTS: u64 = 100;

/// Configuration for a [`PayoutWallet`].
///
/// All values are plain data supplied by the caller; credential loading
/// lives outside this crate.
#[derive(Debug, Clone)]
pub struct PayoutConfig {
    /// The funding (player pool) address payouts are spent from.
    pub funding_address: String,
    /// Hex-encoded private key controlling the funding address.
    pub private_key_hex: String,
    /// Destination of the dev-fee output. `None` disables dev fees.
    pub dev_fee_address: Option<String>,
    /// Dev-fee rate in basis points of the win differential.
    pub dev_fee_basis_points: u64,
    /// Flat network fee per payout, in satoshis.
    pub fee_satoshis: u64,
    /// Network the addresses belong to.
    pub network: Network,
}

impl PayoutConfig {
    /// Create a mainnet configuration with the default fee and dev-fee rate.
    ///
    /// # Arguments
    /// * `funding_address` - The player pool address.
    /// * `private_key_hex` - Hex private key for that address.
    /// * `dev_fee_address` - Optional dev-fee destination.
    ///
    /// # Returns
    /// A `PayoutConfig` with the standard fee policy.
    pub fn new(
        funding_address: impl Into<String>,
        private_key_hex: impl Into<String>,
        dev_fee_address: Option<String>,
    ) -> Self {
        PayoutConfig {
            funding_address: funding_address.into(),
            private_key_hex: private_key_hex.into(),
            dev_fee_address,
            dev_fee_basis_points: DEFAULT_DEV_FEE_BASIS_POINTS,
            fee_satoshis: DEFAULT_FEE_SATOSHIS,
            network: Network::Mainnet,
        }
    }
}

/// A wallet that pays out winnings from a single funding address.
pub struct PayoutWallet {
    node: NodeClient,
    key: PrivateKey,
    funding: Address,
    dev_fee_address: Option<Address>,
    dev_fee_basis_points: u64,
    fee_satoshis: u64,
}

impl PayoutWallet {
    /// Build a wallet from a node client and configuration.
    ///
    /// Parses the key and all addresses, then verifies that the key
    /// actually controls the configured funding address by deriving the
    /// address from the key's compressed public key and comparing. This
    /// check runs once, before any signing operation is possible.
    ///
    /// # Arguments
    /// * `node` - The node client for UTXO queries and broadcast.
    /// * `config` - Wallet configuration.
    ///
    /// # Returns
    /// `Ok(PayoutWallet)`, or `KeyMismatch` / address / key errors.
    pub fn new(node: NodeClient, config: PayoutConfig) -> Result<Self, WalletError> {
        let key = PrivateKey::from_hex(&config.private_key_hex)?;
        let funding = Address::from_string(&config.funding_address)?;

        let derived = Address::from_public_key(&key.pub_key(), config.network);
        if derived != funding {
            return Err(WalletError::KeyMismatch {
                configured: funding.address_string,
                derived: derived.address_string,
            });
        }

        let dev_fee_address = config
            .dev_fee_address
            .as_deref()
            .map(Address::from_string)
            .transpose()?;

        debug!(funding = %funding, "payout wallet initialized");
        Ok(PayoutWallet {
            node,
            key,
            funding,
            dev_fee_address,
            dev_fee_basis_points: config.dev_fee_basis_points,
            fee_satoshis: config.fee_satoshis,
        })
    }

    /// Compute the dev fee for a win differential.
    ///
    /// The differential can be negative (a net loss); the fee is taken on
    /// the positive part only: `max(0, win_differential) * rate / 10_000`,
    /// in integer satoshis. A zero result means no dev-fee output.
    ///
    /// # Arguments
    /// * `win_differential` - Net winnings in satoshis, possibly negative.
    ///
    /// # Returns
    /// The dev fee in satoshis.
    pub fn dev_fee_for(&self, win_differential: i64) -> u64 {
        if self.dev_fee_address.is_none() {
            return 0;
        }
        let positive = win_differential.max(0) as u64;
        positive.saturating_mul(self.dev_fee_basis_points) / 10_000
    }

    /// Sum the spendable balance of an address.
    ///
    /// # Arguments
    /// * `address` - The address to query.
    ///
    /// # Returns
    /// The total satoshis across outputs with at least one confirmation.
    pub async fn fetch_balance(&self, address: &str) -> Result<u64, WalletError> {
        let utxos = self.node.list_unspent(address, SPENDABLE_MIN_CONF).await?;
        Ok(utxos.iter().map(|u| u.satoshis).sum())
    }

    /// Pay out `amount` satoshis to `recipient`.
    ///
    /// Runs the full pipeline: decode the recipient address, fetch the
    /// funding address's UTXOs, compute the dev fee from the win
    /// differential, build the transaction (recipient, optional dev fee,
    /// change back to the funding address), sign every input, serialize,
    /// and broadcast. A failure before broadcast leaves no trace on the
    /// network and the whole pipeline may be retried from a fresh UTXO
    /// fetch; a broadcast rejection is terminal for this transaction.
    ///
    /// # Arguments
    /// * `recipient` - Destination address string.
    /// * `amount` - Payout value in satoshis.
    /// * `win_differential` - Net winnings in satoshis; drives the dev fee.
    ///
    /// # Returns
    /// The transaction ID confirmed by the node. Anything else is an error;
    /// a missing txid is never treated as success.
    pub async fn send_value(
        &self,
        recipient: &str,
        amount: u64,
        win_differential: i64,
    ) -> Result<String, WalletError> {
        let recipient = Address::from_string(recipient)?;

        let utxos = self
            .node
            .list_unspent(&self.funding.address_string, SPENDABLE_MIN_CONF)
            .await?;

        let dev_fee_satoshis = self.dev_fee_for(win_differential);
        let dev_fee = match (&self.dev_fee_address, dev_fee_satoshis) {
            (Some(address), satoshis) if satoshis > 0 => Some(DevFee {
                address: address.clone(),
                satoshis,
            }),
            _ => None,
        };

        let payment = Payment {
            recipient,
            amount,
            fee: self.fee_satoshis,
            dev_fee,
            change_address: self.funding.clone(),
        };

        let mut tx = build_payment(&utxos, &payment)?;
        debug!(
            inputs = tx.inputs.len(),
            outputs = tx.outputs.len(),
            amount,
            dev_fee = dev_fee_satoshis,
            fee = self.fee_satoshis,
            "payout transaction built"
        );

        tx.sign(&p2pkh::unlock(self.key.clone(), None))?;

        let raw_tx_hex = tx.to_hex();
        let txid = self.node.send_raw_transaction(&raw_tx_hex).await?;
        info!(%txid, amount, "payout broadcast");
        Ok(txid)
    }
}
