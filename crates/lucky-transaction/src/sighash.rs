//! Signature hash computation for transaction signing.
//!
//! Computes the digest that is signed by ECDSA to authorize spending a
//! transaction input. The ledger verifies the original (pre-fork) legacy
//! algorithm: the transaction is re-serialized with the signed input's
//! script field replaced by the spent output's locking script (the
//! scriptCode) and every other input's script field empty, the 4-byte
//! little-endian sighash type is appended, and the result is double
//! SHA-256 hashed. No amount is committed.

use lucky_primitives::hash::sha256d;
use lucky_primitives::util::{VarInt, WireWriter};

use crate::transaction::Transaction;
use crate::TransactionError;

/// Sign all inputs and all outputs. The only mode this engine emits.
pub const SIGHASH_ALL: u32 = 0x01;

/// Compute the legacy signature hash for a given input.
///
/// # Arguments
/// * `tx`           - The transaction being signed.
/// * `input_index`  - Index of the input being signed.
/// * `script_code`  - The locking script of the output being spent.
/// * `sighash_type` - The sighash flags (`SIGHASH_ALL`).
///
/// # Returns
/// A 32-byte double-SHA256 hash to be signed by ECDSA.
pub fn signature_hash(
    tx: &Transaction,
    input_index: usize,
    script_code: &[u8],
    sighash_type: u32,
) -> Result<[u8; 32], TransactionError> {
    let preimage = signature_preimage(tx, input_index, script_code, sighash_type)?;
    Ok(sha256d(&preimage))
}

/// Compute the signing-scope serialization (preimage) before double-hashing.
///
/// The preimage is the transaction in wire format with two substitutions:
/// the input at `input_index` carries `script_code` in its script field and
/// every other input carries a zero-length script. Output serialization is
/// unchanged from final mode. The 4-byte little-endian sighash type is
/// appended at the end.
///
/// The result is a pure function of `(tx, input_index, script_code,
/// sighash_type)`; in particular it does not depend on any input's
/// unlocking script, so attaching signatures to other inputs never changes
/// this input's digest.
///
/// # Arguments
/// * `tx`           - The transaction being signed.
/// * `input_index`  - Index of the input being signed.
/// * `script_code`  - The locking script of the output being spent.
/// * `sighash_type` - The sighash flags.
///
/// # Returns
/// The raw preimage bytes (not yet hashed).
pub fn signature_preimage(
    tx: &Transaction,
    input_index: usize,
    script_code: &[u8],
    sighash_type: u32,
) -> Result<Vec<u8>, TransactionError> {
    if input_index >= tx.inputs.len() {
        return Err(TransactionError::InvalidTransaction(format!(
            "input index {} out of range (tx has {} inputs)",
            input_index,
            tx.inputs.len()
        )));
    }

    let mut writer = WireWriter::with_capacity(256);

    writer.write_u32_le(tx.version);

    writer.write_varint(VarInt::from(tx.inputs.len()));
    for (i, input) in tx.inputs.iter().enumerate() {
        if i == input_index {
            input.write_with_script(&mut writer, script_code);
        } else {
            input.write_with_script(&mut writer, &[]);
        }
    }

    writer.write_varint(VarInt::from(tx.outputs.len()));
    for output in &tx.outputs {
        output.write_to(&mut writer);
    }

    writer.write_u32_le(tx.lock_time);

    // Sighash type, 4 bytes little-endian.
    writer.write_u32_le(sighash_type);

    Ok(writer.into_bytes())
}
