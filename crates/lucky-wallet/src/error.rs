//! Error types for the payout engine.

/// Errors surfaced by the payout pipeline.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The configured private key does not control the configured funding
    /// address. Nothing is signed or broadcast in this state.
    #[error("spending key mismatch: configured address {configured}, key derives {derived}")]
    KeyMismatch {
        /// The funding address from configuration.
        configured: String,
        /// The address derived from the configured private key.
        derived: String,
    },

    /// Address or script failure (forwarded from `lucky-script`).
    #[error("script error: {0}")]
    Script(#[from] lucky_script::ScriptError),

    /// Key or signature failure (forwarded from `lucky-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] lucky_primitives::PrimitivesError),

    /// Build or signing failure (forwarded from `lucky-transaction`).
    #[error("transaction error: {0}")]
    Transaction(#[from] lucky_transaction::TransactionError),

    /// Node transport, RPC, or broadcast failure (forwarded from
    /// `lucky-node`).
    #[error("node error: {0}")]
    Node(#[from] lucky_node::NodeError),
}
