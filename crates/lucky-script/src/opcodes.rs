//! Opcode constants for the script operations this SDK emits and inspects.
//!
//! Only the P2PKH-relevant subset of the script language is defined here;
//! the engine never interprets scripts, it only builds and pattern-matches
//! them.

/// Push an empty array onto the stack.
pub const OP_0: u8 = 0x00;

/// Smallest direct data push (1 byte follows).
pub const OP_DATA_1: u8 = 0x01;

/// Direct push of 20 bytes; the pubkey-hash push in a P2PKH script.
pub const OP_DATA_20: u8 = 0x14;

/// Largest direct data push (75 bytes follow).
pub const OP_DATA_75: u8 = 0x4b;

/// The next byte contains the number of bytes to push.
pub const OP_PUSHDATA1: u8 = 0x4c;

/// The next 2 bytes (LE) contain the number of bytes to push.
pub const OP_PUSHDATA2: u8 = 0x4d;

/// The next 4 bytes (LE) contain the number of bytes to push.
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Duplicate the top stack item.
pub const OP_DUP: u8 = 0x76;

/// Pop two items and verify they are equal.
pub const OP_EQUALVERIFY: u8 = 0x88;

/// Hash the top stack item with SHA-256 then RIPEMD-160.
pub const OP_HASH160: u8 = 0xa9;

/// Verify an ECDSA signature against a public key.
pub const OP_CHECKSIG: u8 = 0xac;
