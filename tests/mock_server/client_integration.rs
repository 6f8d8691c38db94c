use serde::Deserialize;
use serde_json::json;
use tests::common::*;
use xpx_sdk::{mock::MockServer, setup_with_address, NetworkType};

#[derive(Debug, Deserialize)]
struct ChainHeight {
    height: Vec<u32>,
}

#[tokio::test]
async fn test_client_reads_canned_json() {
    let server = MockServer::start(node_routes()).await.unwrap();

    let height: ChainHeight = validate_resp(server.client().get_json("/chain/height").await);
    assert_eq!(height.height, vec![11235, 0]);

    server.teardown().await;
}

#[tokio::test]
async fn test_client_injected_by_url() {
    let server = MockServer::start(node_routes()).await.unwrap();
    let client = setup_with_address(server.url()).unwrap();
    assert_eq!(client.network_type(), NetworkType::TestNet);

    let request = json!({ "addresses": ["SAONSOGFZZHNEIBRYXHDTDTBR2YSAXKTITRFHG2Y"] });
    let accounts: Vec<serde_json::Value> =
        validate_resp(client.post_json("/account", &request).await);
    assert_eq!(accounts.len(), 1);

    server.teardown().await;
}

#[tokio::test]
async fn test_client_surfaces_validation_errors() {
    let server = MockServer::start(node_routes()).await.unwrap();
    let client = server.client();

    let body = expect_status(client.get_text("/transaction/status?group=confirmed").await, 400);
    assert_eq!(body, "bad params - hash");

    let body = expect_status(client.get_text("/transaction/status").await, 400);
    assert_eq!(body, "error during params validate - bad type param");

    let body = expect_status(client.post_form("/transactions/announce", &[]).await, 400);
    assert_eq!(body, "bad params - body is empty,signer");

    let body = expect_status(client.get_text("/mosaic/unknown").await, 404);
    assert_eq!(body, "/mosaic/unknown not found in mock routers");

    server.teardown().await;
}
