/// Luckycoin payout SDK - node RPC client.
///
/// Provides an explicit client object for a Luckycoin Core-style node's
/// JSON-RPC interface: querying spendable outputs for an address and
/// broadcasting raw transactions. Amounts cross the boundary as decimal
/// JSON numbers and are converted to integer satoshis by exact decimal
/// scaling.

pub mod client;
pub mod types;

mod error;
pub use client::{coins_to_satoshis, NodeClient};
pub use error::NodeError;
pub use types::NodeConfig;
