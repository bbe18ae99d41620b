//! Chain hash type for transaction identification.
//!
//! Provides a `Hash` type — a 32-byte array displayed as byte-reversed hex,
//! matching the ledger's convention for transaction IDs: little-endian
//! internal storage, big-endian display.

use std::fmt;

use crate::PrimitivesError;

/// Size of a Hash in bytes.
pub const HASH_SIZE: usize = 32;

/// A 32-byte hash used for transaction IDs.
///
/// When displayed as a string, the bytes are reversed to match the standard
/// representation used by node RPC interfaces and block explorers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Create a Hash from a raw 32-byte array.
    ///
    /// The bytes are stored as-is (internal byte order).
    ///
    /// # Arguments
    /// * `bytes` - The 32 bytes in internal (little-endian) order.
    ///
    /// # Returns
    /// A new `Hash`.
    pub fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// Create a Hash from a byte slice in internal order.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(Hash)` if the slice is 32 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != HASH_SIZE {
            return Err(PrimitivesError::InvalidHash(format!(
                "invalid hash length of {}, want {}",
                bytes.len(),
                HASH_SIZE
            )));
        }
        let mut arr = [0u8; HASH_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Hash(arr))
    }

    /// Create a Hash from a byte-reversed hex string.
    ///
    /// The hex string represents bytes in display order, as returned by a
    /// node's RPC interface (e.g. the `txid` field of `listunspent`).
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character hex string in display order.
    ///
    /// # Returns
    /// `Ok(Hash)` on success, or an error for invalid input.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let decoded = hex::decode(hex_str)?;
        if decoded.len() != HASH_SIZE {
            return Err(PrimitivesError::InvalidHash(format!(
                "invalid hash hex length of {}, want {}",
                decoded.len(),
                HASH_SIZE
            )));
        }
        let mut dst = [0u8; HASH_SIZE];
        for (i, b) in decoded.iter().rev().enumerate() {
            dst[i] = *b;
        }
        Ok(Hash(dst))
    }

    /// Return the hash bytes in internal (little-endian) order.
    ///
    /// # Returns
    /// A reference to the 32-byte array.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }
}

impl fmt::Display for Hash {
    /// Display the hash as byte-reversed hex (display order).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "{}", hex::encode(reversed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_display_roundtrip() {
        let hex_str = "6fe28c0ab6f1b372c1a6a246ae63f74f931e8365e15a089c68d6190000000000";
        let hash = Hash::from_hex(hex_str).expect("should parse");
        assert_eq!(hash.to_string(), hex_str);
        // Internal order is the byte-reversed display order.
        assert_eq!(hash.as_bytes()[31], 0x6f);
        assert_eq!(hash.as_bytes()[0], 0x00);
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let bytes = [0x42u8; 32];
        let hash = Hash::from_bytes(&bytes).expect("should build");
        assert_eq!(hash.as_bytes(), &bytes);
        assert_eq!(hash, Hash::new(bytes));
    }

    #[test]
    fn test_invalid_lengths() {
        assert!(Hash::from_bytes(&[0u8; 31]).is_err());
        assert!(Hash::from_hex("abcd").is_err());
        assert!(Hash::from_hex("zz").is_err());
    }
}
