//! Pay-to-Public-Key-Hash (P2PKH) script template.
//!
//! Creates standard P2PKH locking scripts (`OP_DUP OP_HASH160 <hash>
//! OP_EQUALVERIFY OP_CHECKSIG`) and unlocking scripts (`<sig> <pubkey>`).

use lucky_primitives::ec::PrivateKey;
use lucky_script::opcodes::*;
use lucky_script::{Address, Script};

use crate::sighash::{self, SIGHASH_ALL};
use crate::template::UnlockingScriptTemplate;
use crate::transaction::Transaction;
use crate::TransactionError;

/// Create a P2PKH locking script for an address.
///
/// Produces: `OP_DUP OP_HASH160 <20-byte pubkey hash> OP_EQUALVERIFY OP_CHECKSIG`
///
/// # Arguments
/// * `address` - The address whose public key hash to lock to.
///
/// # Returns
/// The 25-byte P2PKH locking script.
pub fn lock(address: &Address) -> Script {
    let pkh = &address.public_key_hash;

    let mut bytes = Vec::with_capacity(25);
    bytes.push(OP_DUP);
    bytes.push(OP_HASH160);
    bytes.push(OP_DATA_20);
    bytes.extend_from_slice(pkh);
    bytes.push(OP_EQUALVERIFY);
    bytes.push(OP_CHECKSIG);

    Script::from_bytes(&bytes)
}

/// Create a P2PKH unlocker for signing transaction inputs.
///
/// # Arguments
/// * `private_key` - The private key used to sign.
/// * `sighash_type` - Optional sighash type. Defaults to `SIGHASH_ALL` (0x01).
///
/// # Returns
/// A `P2pkhUnlocker` implementing `UnlockingScriptTemplate`.
pub fn unlock(private_key: PrivateKey, sighash_type: Option<u32>) -> P2pkhUnlocker {
    P2pkhUnlocker {
        private_key,
        sighash_type: sighash_type.unwrap_or(SIGHASH_ALL),
    }
}

/// P2PKH signing template holding a private key and sighash type.
///
/// Implements `UnlockingScriptTemplate` to produce unlocking scripts
/// of the form `<DER_signature + sighash_byte> <compressed_pubkey>`.
pub struct P2pkhUnlocker {
    /// The private key used for ECDSA signing.
    private_key: PrivateKey,

    /// The sighash type to use (`SIGHASH_ALL`).
    sighash_type: u32,
}

impl UnlockingScriptTemplate for P2pkhUnlocker {
    /// Sign the specified input and produce the unlocking script.
    ///
    /// Verifies that the key controls the spent output before signing:
    /// Hash160 of the compressed public key must equal the pubkey hash in
    /// the source output's P2PKH locking script, otherwise the result is a
    /// `SigningError` and nothing is signed. Then computes the legacy
    /// signature hash, signs it with RFC6979 deterministic ECDSA, and
    /// constructs the unlocking script:
    /// `<DER_sig || sighash_byte> <compressed_pubkey>`.
    ///
    /// # Arguments
    /// * `tx` - The transaction being signed.
    /// * `input_index` - The index of the input to sign.
    ///
    /// # Returns
    /// `Ok(Script)` containing the P2PKH unlocking script.
    fn sign(&self, tx: &Transaction, input_index: u32) -> Result<Script, TransactionError> {
        let idx = input_index as usize;

        if idx >= tx.inputs.len() {
            return Err(TransactionError::SigningError(format!(
                "input index {} out of range (tx has {} inputs)",
                idx,
                tx.inputs.len()
            )));
        }

        let input = &tx.inputs[idx];
        let source_output = input.source_tx_output().ok_or_else(|| {
            TransactionError::SigningError(
                "missing source output on input (no previous tx info)".to_string(),
            )
        })?;

        // The key must control the output being spent. Failing here keeps a
        // mismatched key from ever reaching the network.
        let pub_key = self.private_key.pub_key();
        let script_pkh = source_output.locking_script.p2pkh_pubkey_hash().map_err(|_| {
            TransactionError::SigningError(
                "source output locking script is not P2PKH".to_string(),
            )
        })?;
        if script_pkh != pub_key.hash160() {
            return Err(TransactionError::SigningError(format!(
                "private key does not control the spent output (script hash {}, key hash {})",
                hex::encode(script_pkh),
                hex::encode(pub_key.hash160())
            )));
        }

        // Compute the legacy signature hash with the spent locking script
        // as the scriptCode.
        let script_code = source_output.locking_script.to_bytes();
        let sig_hash = sighash::signature_hash(tx, idx, script_code, self.sighash_type)?;

        // Sign the hash (RFC6979 deterministic ECDSA, low-S DER).
        let signature = self.private_key.sign(&sig_hash)?;

        // Build the DER signature with the sighash byte appended.
        let der_sig = signature.to_der();
        let mut sig_buf = Vec::with_capacity(der_sig.len() + 1);
        sig_buf.extend_from_slice(&der_sig);
        sig_buf.push(self.sighash_type as u8);

        // Build the unlocking script: PUSHDATA(sig) PUSHDATA(pubkey).
        let mut script = Script::new();
        script.append_push_data(&sig_buf)?;
        script.append_push_data(&pub_key.to_compressed())?;

        Ok(script)
    }
}
