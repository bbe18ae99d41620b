//! First-fit payment builder.
//!
//! Selects spendable outputs to cover a requested payment, then assembles
//! an unsigned transaction with the fixed output order: recipient, optional
//! dev-fee, change. The network fee is implicit - it is the difference
//! between total input and total output and never produces an output.

use lucky_primitives::chainhash::Hash;
use lucky_script::{Address, Script};

use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::template::p2pkh;
use crate::transaction::Transaction;
use crate::TransactionError;

/// One spendable prior output controlled by the sender.
///
/// Immutable once fetched. Values are integer satoshis; the decimal
/// amounts reported by the node are converted before a `Utxo` is built.
#[derive(Clone, Debug)]
pub struct Utxo {
    /// Transaction ID of the prior output.
    pub txid: Hash,
    /// Index of the output within its transaction.
    pub vout: u32,
    /// Value in satoshis.
    pub satoshis: u64,
    /// The locking script of the prior output.
    pub locking_script: Script,
}

/// The optional protocol/developer fee output of a payment.
#[derive(Clone, Debug)]
pub struct DevFee {
    /// Destination of the dev-fee output.
    pub address: Address,
    /// Value in satoshis. Zero means no dev-fee output is emitted.
    pub satoshis: u64,
}

/// A requested value transfer.
#[derive(Clone, Debug)]
pub struct Payment {
    /// Destination of the main payment output.
    pub recipient: Address,
    /// Value of the main payment output in satoshis.
    pub amount: u64,
    /// Flat network fee in satoshis. Collected implicitly by miners; never
    /// an output.
    pub fee: u64,
    /// Optional dev-fee output.
    pub dev_fee: Option<DevFee>,
    /// Where any strictly positive remainder is returned.
    pub change_address: Address,
}

impl Payment {
    /// Total satoshis the selected inputs must cover:
    /// amount + fee + dev fee.
    ///
    /// # Returns
    /// `Ok(total)` or `InvalidAmount` on overflow.
    pub fn required_total(&self) -> Result<u64, TransactionError> {
        let dev_fee = self.dev_fee.as_ref().map(|d| d.satoshis).unwrap_or(0);
        self.amount
            .checked_add(self.fee)
            .and_then(|t| t.checked_add(dev_fee))
            .ok_or_else(|| {
                TransactionError::InvalidAmount("required total overflows u64".to_string())
            })
    }
}

/// Build an unsigned transaction paying `payment` from `utxos`.
///
/// Inputs are selected first-fit in the order supplied, accumulating until
/// the running total reaches the required total, then selection stops.
/// Outputs are emitted in fixed order: recipient, dev fee (only if strictly
/// positive), change (only if the remainder is strictly positive). Each
/// input stores its source output so the signer can compute digests and
/// check key ownership.
///
/// # Arguments
/// * `utxos`   - Spendable outputs, in selection order.
/// * `payment` - The requested transfer.
///
/// # Returns
/// An unsigned `Transaction`, or `InvalidAmount` when there is nothing to
/// spend or nothing to pay, or `InsufficientFunds` when the UTXOs cannot
/// cover the required total.
pub fn build_payment(utxos: &[Utxo], payment: &Payment) -> Result<Transaction, TransactionError> {
    let required = payment.required_total()?;
    if required == 0 {
        return Err(TransactionError::InvalidAmount(
            "required total is zero".to_string(),
        ));
    }
    if utxos.is_empty() {
        return Err(TransactionError::InvalidAmount(
            "no spendable outputs supplied".to_string(),
        ));
    }

    let mut tx = Transaction::new();
    let mut total_input: u64 = 0;

    for utxo in utxos {
        let mut input = TransactionInput::new();
        input.source_txid = *utxo.txid.as_bytes();
        input.source_tx_out_index = utxo.vout;
        input.set_source_output(Some(TransactionOutput {
            satoshis: utxo.satoshis,
            locking_script: utxo.locking_script.clone(),
        }));
        tx.add_input(input);

        total_input = total_input.checked_add(utxo.satoshis).ok_or_else(|| {
            TransactionError::InvalidAmount("input total overflows u64".to_string())
        })?;
        if total_input >= required {
            break;
        }
    }

    if total_input < required {
        return Err(TransactionError::InsufficientFunds {
            required,
            available: total_input,
        });
    }

    // Recipient output.
    tx.add_output(TransactionOutput {
        satoshis: payment.amount,
        locking_script: p2pkh::lock(&payment.recipient),
    });

    // Dev-fee output, only when strictly positive.
    if let Some(dev_fee) = &payment.dev_fee {
        if dev_fee.satoshis > 0 {
            tx.add_output(TransactionOutput {
                satoshis: dev_fee.satoshis,
                locking_script: p2pkh::lock(&dev_fee.address),
            });
        }
    }

    // Change output, only when the remainder is strictly positive.
    let change = total_input - required;
    if change > 0 {
        tx.add_output(TransactionOutput {
            satoshis: change,
            locking_script: p2pkh::lock(&payment.change_address),
        });
    }

    Ok(tx)
}
