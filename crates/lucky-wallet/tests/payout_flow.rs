//! End-to-end payout pipeline tests against a mock node.
//!
//! The mock answers `listunspent` and `sendrawtransaction`; the tests
//! decode the raw transaction the wallet actually posts and check the
//! output split, plus the failure paths that must never reach the network.

use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lucky_node::{NodeClient, NodeConfig, NodeError};
use lucky_primitives::ec::PrivateKey;
use lucky_script::{Address, Network};
use lucky_transaction::template::p2pkh;
use lucky_transaction::{Transaction, TransactionError};
use lucky_wallet::{PayoutConfig, PayoutWallet, WalletError};

/// A deterministic key for the funding (player pool) address.
fn funding_key() -> PrivateKey {
    PrivateKey::from_bytes(&[7; 32]).unwrap()
}

fn address_of(key: &PrivateKey) -> Address {
    Address::from_public_key(&key.pub_key(), Network::Mainnet)
}

fn recipient_address() -> Address {
    address_of(&PrivateKey::from_bytes(&[5; 32]).unwrap())
}

fn dev_fee_address() -> Address {
    address_of(&PrivateKey::from_bytes(&[9; 32]).unwrap())
}

fn wallet_config() -> PayoutConfig {
    PayoutConfig::new(
        address_of(&funding_key()).address_string,
        funding_key().to_hex(),
        Some(dev_fee_address().address_string),
    )
}

fn node_client(url: &str) -> NodeClient {
    NodeClient::new(NodeConfig::new(url, "rpcuser", "rpcpassword")).unwrap()
}

/// A `listunspent` response body with one UTXO of the given decimal amount
/// locked to the funding address.
fn listunspent_body(amount: &str) -> String {
    let funding = address_of(&funding_key());
    format!(
        r#"{{
            "result": [{{
                "txid": "{}",
                "vout": 0,
                "address": "{}",
                "scriptPubKey": "{}",
                "amount": {},
                "confirmations": 10
            }}],
            "error": null,
            "id": "lucky-sdk"
        }}"#,
        "ab".repeat(32),
        funding.address_string,
        p2pkh::lock(&funding).to_hex(),
        amount,
    )
}

async fn mount_listunspent(server: &MockServer, amount: &str) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({"method": "listunspent"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(listunspent_body(amount), "application/json"),
        )
        .mount(server)
        .await;
}

// -----------------------------------------------------------------------
// The happy path: fetch, build, sign, broadcast
// -----------------------------------------------------------------------

#[tokio::test]
async fn test_send_value_full_pipeline() {
    let server = MockServer::start().await;
    mount_listunspent(&server, "1.00000000").await;

    let txid = "cd".repeat(32);
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "method": "sendrawtransaction"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(r#"{{"result": "{}", "error": null, "id": "lucky-sdk"}}"#, txid),
            "application/json",
        ))
        .mount(&server)
        .await;

    let wallet = PayoutWallet::new(node_client(&server.uri()), wallet_config()).unwrap();

    // 0.4 coins to the recipient, with a 0.1-coin net win driving a 1%
    // (100_000 satoshi) dev fee.
    let result = wallet
        .send_value(&recipient_address().address_string, 40_000_000, 10_000_000)
        .await
        .unwrap();
    assert_eq!(result, txid);

    // Decode the raw transaction the wallet posted.
    let requests = server.received_requests().await.unwrap();
    let broadcast = requests
        .iter()
        .map(|r| serde_json::from_slice::<serde_json::Value>(&r.body).unwrap())
        .find(|v| v["method"] == "sendrawtransaction")
        .expect("a broadcast request was made");
    let raw_hex = broadcast["params"][0].as_str().unwrap();
    let tx = Transaction::from_hex(raw_hex).unwrap();

    // One input spending the mocked UTXO, signed.
    assert_eq!(tx.inputs.len(), 1);
    assert!(tx.inputs[0].unlocking_script.is_some());

    // Fixed output order: recipient, dev fee, change; satoshi-exact split
    // with the 2_250_000 flat fee implicit.
    assert_eq!(tx.outputs.len(), 3);
    assert_eq!(tx.outputs[0].satoshis, 40_000_000);
    assert_eq!(
        tx.outputs[0].locking_script.to_hex(),
        p2pkh::lock(&recipient_address()).to_hex()
    );
    assert_eq!(tx.outputs[1].satoshis, 100_000);
    assert_eq!(
        tx.outputs[1].locking_script.to_hex(),
        p2pkh::lock(&dev_fee_address()).to_hex()
    );
    assert_eq!(tx.outputs[2].satoshis, 57_650_000);
    assert_eq!(
        tx.outputs[2].locking_script.to_hex(),
        p2pkh::lock(&address_of(&funding_key())).to_hex()
    );
}

/// A net loss produces no dev-fee output.
#[tokio::test]
async fn test_send_value_negative_differential_omits_dev_fee() {
    let server = MockServer::start().await;
    mount_listunspent(&server, "1.00000000").await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "method": "sendrawtransaction"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(r#"{{"result": "{}", "error": null, "id": "lucky-sdk"}}"#, "cd".repeat(32)),
            "application/json",
        ))
        .mount(&server)
        .await;

    let wallet = PayoutWallet::new(node_client(&server.uri()), wallet_config()).unwrap();
    wallet
        .send_value(&recipient_address().address_string, 40_000_000, -10_000_000)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let broadcast = requests
        .iter()
        .map(|r| serde_json::from_slice::<serde_json::Value>(&r.body).unwrap())
        .find(|v| v["method"] == "sendrawtransaction")
        .unwrap();
    let tx = Transaction::from_hex(broadcast["params"][0].as_str().unwrap()).unwrap();

    // Recipient and change only.
    assert_eq!(tx.outputs.len(), 2);
    assert_eq!(tx.outputs[0].satoshis, 40_000_000);
    assert_eq!(tx.outputs[1].satoshis, 57_750_000);
}

// -----------------------------------------------------------------------
// Failure paths
// -----------------------------------------------------------------------

/// A balance below the requirement fails before any broadcast attempt.
#[tokio::test]
async fn test_send_value_insufficient_funds() {
    let server = MockServer::start().await;
    mount_listunspent(&server, "0.00001000").await; // 1_000 satoshis

    let wallet = PayoutWallet::new(node_client(&server.uri()), wallet_config()).unwrap();
    let result = wallet
        .send_value(&recipient_address().address_string, 5_000, 0)
        .await;

    assert!(matches!(
        result,
        Err(WalletError::Transaction(TransactionError::InsufficientFunds { .. }))
    ));

    // Nothing was broadcast.
    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| {
        let v: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
        v["method"] != "sendrawtransaction"
    }));
}

/// An invalid recipient address fails before any network call.
#[tokio::test]
async fn test_send_value_invalid_recipient() {
    let server = MockServer::start().await;
    let wallet = PayoutWallet::new(node_client(&server.uri()), wallet_config()).unwrap();

    let result = wallet.send_value("not-an-address", 1_000_000, 0).await;
    assert!(matches!(result, Err(WalletError::Script(_))));

    assert!(server.received_requests().await.unwrap().is_empty());
}

/// A key that does not control the funding address is caught at
/// construction, before any signing or network traffic is possible.
#[tokio::test]
async fn test_key_mismatch_rejected_at_construction() {
    let server = MockServer::start().await;

    let other_key = PrivateKey::from_bytes(&[11; 32]).unwrap();
    let config = PayoutConfig::new(
        address_of(&other_key).address_string, // not the funding key's address
        funding_key().to_hex(),
        None,
    );

    let result = PayoutWallet::new(node_client(&server.uri()), config);
    assert!(matches!(result, Err(WalletError::KeyMismatch { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// A node rejection surfaces the node's reason verbatim.
#[tokio::test]
async fn test_send_value_broadcast_rejected() {
    let server = MockServer::start().await;
    mount_listunspent(&server, "1.00000000").await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "method": "sendrawtransaction"
        })))
        .respond_with(ResponseTemplate::new(500).set_body_raw(
            r#"{"result": null, "error": {"code": -25, "message": "missing-inputs"}, "id": "lucky-sdk"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let wallet = PayoutWallet::new(node_client(&server.uri()), wallet_config()).unwrap();
    let result = wallet
        .send_value(&recipient_address().address_string, 1_000_000, 0)
        .await;

    match result {
        Err(WalletError::Node(NodeError::Rejected { code, message })) => {
            assert_eq!(code, -25);
            assert_eq!(message, "missing-inputs");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

// -----------------------------------------------------------------------
// Balance
// -----------------------------------------------------------------------

#[tokio::test]
async fn test_fetch_balance_sums_utxos() {
    let server = MockServer::start().await;
    let funding = address_of(&funding_key());
    let script_hex = p2pkh::lock(&funding).to_hex();

    let body = format!(
        r#"{{
            "result": [
                {{"txid": "{}", "vout": 0, "scriptPubKey": "{}", "amount": 1.50000000, "confirmations": 3}},
                {{"txid": "{}", "vout": 2, "scriptPubKey": "{}", "amount": 0.02250000, "confirmations": 8}}
            ],
            "error": null,
            "id": "lucky-sdk"
        }}"#,
        "ab".repeat(32),
        script_hex,
        "ba".repeat(32),
        script_hex,
    );

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let wallet = PayoutWallet::new(node_client(&server.uri()), wallet_config()).unwrap();
    let balance = wallet.fetch_balance(&funding.address_string).await.unwrap();
    assert_eq!(balance, 152_250_000);
}

// -----------------------------------------------------------------------
// Dev-fee policy
// -----------------------------------------------------------------------

#[tokio::test]
async fn test_dev_fee_policy() {
    let server = MockServer::start().await;
    let wallet = PayoutWallet::new(node_client(&server.uri()), wallet_config()).unwrap();

    // 1% of the positive differential, integer satoshis.
    assert_eq!(wallet.dev_fee_for(10_000_000), 100_000);
    assert_eq!(wallet.dev_fee_for(1), 0); // rounds down to nothing
    assert_eq!(wallet.dev_fee_for(0), 0);
    assert_eq!(wallet.dev_fee_for(-10_000_000), 0);

    // Without a dev-fee address the fee is always zero.
    let mut config = wallet_config();
    config.dev_fee_address = None;
    let no_dev = PayoutWallet::new(node_client(&server.uri()), config).unwrap();
    assert_eq!(no_dev.dev_fee_for(10_000_000), 0);
}
