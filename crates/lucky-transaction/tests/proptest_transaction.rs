use proptest::prelude::*;

use lucky_primitives::chainhash::Hash;
use lucky_script::{Address, Network, Script};
use lucky_transaction::{build_payment, Payment, Transaction, TransactionInput, TransactionOutput, Utxo};

/// Strategy to generate a structurally valid random transaction.
fn arb_transaction() -> impl Strategy<Value = Transaction> {
    let arb_input = (
        prop::array::uniform32(any::<u8>()),       // prev tx hash
        any::<u32>(),                              // prev tx index
        prop::collection::vec(any::<u8>(), 0..64), // script bytes
        any::<u32>(),                              // sequence
    )
        .prop_map(|(hash, idx, script_bytes, seq)| {
            let mut input = TransactionInput::new();
            input.source_txid = hash;
            input.source_tx_out_index = idx;
            input.unlocking_script = if script_bytes.is_empty() {
                None
            } else {
                Some(Script::from_bytes(&script_bytes))
            };
            input.sequence_number = seq;
            input
        });

    let arb_output = (any::<u64>(), prop::collection::vec(any::<u8>(), 0..64)).prop_map(
        |(satoshis, script_bytes)| TransactionOutput {
            satoshis,
            locking_script: Script::from_bytes(&script_bytes),
        },
    );

    (
        any::<u32>(), // version
        prop::collection::vec(arb_input, 1..4),
        prop::collection::vec(arb_output, 1..4),
        any::<u32>(), // locktime
    )
        .prop_map(|(version, inputs, outputs, locktime)| {
            let mut tx = Transaction::new();
            tx.version = version;
            tx.lock_time = locktime;
            for i in inputs {
                tx.add_input(i);
            }
            for o in outputs {
                tx.add_output(o);
            }
            tx
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn transaction_serialize_deserialize_roundtrip(tx in arb_transaction()) {
        let bytes = tx.to_bytes();
        let tx2 = Transaction::from_bytes(&bytes).unwrap();
        let bytes2 = tx2.to_bytes();
        prop_assert_eq!(bytes, bytes2);
    }

    #[test]
    fn transaction_hex_roundtrip(tx in arb_transaction()) {
        let hex_str = tx.to_hex();
        let tx2 = Transaction::from_hex(&hex_str).unwrap();
        prop_assert_eq!(tx.to_hex(), tx2.to_hex());
    }

    /// For any successful build, inputs exactly cover outputs plus the
    /// requested fee, in integer satoshis.
    #[test]
    fn build_conserves_value(
        values in prop::collection::vec(1_000u64..100_000_000, 1..6),
        amount in 1u64..50_000_000,
        fee in 0u64..5_000_000,
    ) {
        let sender = Address::from_public_key_hash(&[0x01; 20], Network::Mainnet);
        let recipient = Address::from_public_key_hash(&[0xaa; 20], Network::Mainnet);

        let utxos: Vec<Utxo> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Utxo {
                txid: Hash::new([i as u8 + 1; 32]),
                vout: i as u32,
                satoshis: *v,
                locking_script: Script::from_bytes(&[0x76]),
            })
            .collect();

        let payment = Payment {
            recipient,
            amount,
            fee,
            dev_fee: None,
            change_address: sender,
        };

        match build_payment(&utxos, &payment) {
            Ok(tx) => {
                let total_in = tx.total_input_satoshis().unwrap();
                let total_out = tx.total_output_satoshis();
                prop_assert_eq!(total_in - total_out, fee);
                prop_assert_eq!(tx.outputs[0].satoshis, amount);
            }
            Err(_) => {
                let available: u64 = values.iter().sum();
                prop_assert!(available < amount + fee);
            }
        }
    }
}
