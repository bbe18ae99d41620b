/// Luckycoin payout SDK - hashing, encoding, and cryptographic primitives.
///
/// This crate provides the foundational building blocks for the SDK:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
/// - Chain hash type for transaction identification
/// - Variable-length integer encoding and wire readers/writers
/// - Base58 / Base58Check encoding and decoding
/// - Elliptic curve cryptography (secp256k1 keys and DER signatures)

pub mod hash;
pub mod chainhash;
pub mod util;
pub mod base58;
pub mod ec;

mod error;
pub use error::PrimitivesError;
