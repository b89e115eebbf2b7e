//! Full stack over HTTP against a mock node, async and blocking.

mod common;

use std::sync::Arc;
use std::thread;

use casperrpc_client::{BlockingClient, CasperClient, ClientError, TransportError};
use casperrpc_types::Amount;
use common::*;
use mockito::Matcher;
use serde_json::json;

fn envelope(result: serde_json::Value) -> String {
    json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string()
}

#[tokio::test]
async fn deploy_not_found_over_http() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/rpc")
        .match_body(Matcher::PartialJson(json!({"method": "info_get_deploy"})))
        .with_status(200)
        .with_body(r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"deploy not found"}}"#)
        .create_async()
        .await;

    let client = CasperClient::http(format!("{}/rpc", server.url())).unwrap();
    let deploy = client.get_deploy("abcd").await.unwrap();
    assert!(deploy.is_none());
}

#[tokio::test]
async fn http_500_surfaces_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rpc")
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create_async()
        .await;

    let client = CasperClient::http(format!("{}/rpc", server.url())).unwrap();
    let err = client.get_status().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Transport(TransportError::HttpStatus { status: 500, .. })
    ));
    assert!(err.to_string().contains("internal error"));
    mock.assert_async().await;
}

#[test]
fn blocking_liquid_balance() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "chain_get_state_root_hash"})))
        .with_body(envelope(state_root_result()))
        .create();
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({"method": "state_get_account_info"})))
        .with_body(envelope(account_info_result()))
        .create();
    let balance_mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "state_get_balance",
            "params": {"purse_uref": MAIN_PURSE}
        })))
        .with_body(envelope(balance_result("1000000000000")))
        .expect(1)
        .create();

    let client = BlockingClient::http(server.url()).unwrap();
    let balance = client.get_liquid_balance(PUBLIC_KEY).unwrap();

    assert_eq!(balance, Amount::from(1_000_000_000_000u64));
    balance_mock.assert();
}

#[test]
fn blocking_client_is_shareable_across_threads() {
    let mock = MockTransport::new();
    for _ in 0..4 {
        mock.reply("info_get_peers", Reply::Result(json!({"api_version": "1.4.3", "peers": []})));
    }
    let client = Arc::new(BlockingClient::new(mock.client()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = Arc::clone(&client);
            thread::spawn(move || client.get_peers().map(|p| p.peers.len()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 0);
    }
    assert_eq!(mock.methods().len(), 4);
}
