/// Error types for script operations.
///
/// Covers encoding/decoding failures, address validation, and script
/// classification problems.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Invalid address string.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid address length after Base58 decoding.
    #[error("invalid address length for '{0}'")]
    InvalidAddressLength(String),

    /// Address version byte not recognized for this chain.
    #[error("address not supported {0}")]
    UnsupportedAddress(String),

    /// Base58Check checksum does not match.
    #[error("checksum failed")]
    EncodingChecksumFailed,

    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Script is not a P2PKH script.
    #[error("not a P2PKH")]
    NotP2pkh,

    /// Push data exceeds maximum allowed size.
    #[error("data too big")]
    DataTooBig,

    /// Error from the primitives crate.
    #[error("primitives error: {0}")]
    Primitives(#[from] lucky_primitives::PrimitivesError),
}
