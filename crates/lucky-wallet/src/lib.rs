/// Luckycoin payout SDK - the payout engine.
///
/// Exposes the two calls the game layer consumes: `send_value` (the full
/// fetch-build-sign-broadcast pipeline) and `fetch_balance`. Verifies at
/// construction time that the configured private key controls the funding
/// address, and applies the dev-fee policy (basis points of a non-negative
/// win differential).

mod error;
pub use error::WalletError;

pub mod payout;
pub use payout::{PayoutConfig, PayoutWallet};
