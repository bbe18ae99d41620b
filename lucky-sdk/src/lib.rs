#![deny(missing_docs)]

//! Luckycoin payout SDK - complete SDK.
//!
//! Re-exports all SDK components for convenient single-crate usage.

pub use lucky_node as node;
pub use lucky_primitives as primitives;
pub use lucky_script as script;
pub use lucky_transaction as transaction;
pub use lucky_wallet as wallet;
