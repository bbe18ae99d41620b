/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The transaction structure is invalid (e.g. index out of range).
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),
    /// The requested payment has no inputs to spend or a zero required total.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// The available UTXOs do not cover the required total.
    #[error("insufficient funds: required {required} satoshis, available {available}")]
    InsufficientFunds {
        /// Total satoshis the payment needs (amount + fee + dev fee).
        required: u64,
        /// Total satoshis across all supplied UTXOs.
        available: u64,
    },
    /// An error occurred during input signing (e.g. key/script mismatch).
    #[error("signing error: {0}")]
    SigningError(String),
    /// An error occurred during binary/hex serialization or deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),
    /// An underlying script error (forwarded from `lucky-script`).
    #[error("script error: {0}")]
    Script(#[from] lucky_script::ScriptError),
    /// An underlying primitives error (forwarded from `lucky-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] lucky_primitives::PrimitivesError),
}
