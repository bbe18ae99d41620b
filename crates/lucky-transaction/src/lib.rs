/// Luckycoin payout SDK - transaction building, signing, and serialization.
///
/// Provides the Transaction type with inputs and outputs, legacy
/// signature-hash computation, first-fit payment building, and binary/hex
/// serialization interoperable with the reference ledger's parser.

pub mod builder;
pub mod input;
pub mod output;
pub mod sighash;
pub mod template;
pub mod transaction;

mod error;
pub use builder::{build_payment, DevFee, Payment, Utxo};
pub use error::TransactionError;
pub use input::TransactionInput;
pub use output::TransactionOutput;
pub use transaction::Transaction;
