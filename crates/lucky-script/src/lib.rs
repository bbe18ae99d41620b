/// Luckycoin payout SDK - script building and address handling.
///
/// Provides the Script type, the opcode constants used by P2PKH scripts,
/// and Base58Check address parsing/generation with Luckycoin version bytes.

pub mod address;
pub mod opcodes;
pub mod script;

mod error;
pub use address::{Address, Network};
pub use error::ScriptError;
pub use script::Script;
