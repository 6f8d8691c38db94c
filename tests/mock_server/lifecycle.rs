use futures::future::join_all;
use std::time::Duration;
use tests::common::*;
use xpx_sdk::mock::MockServer;

#[tokio::test]
async fn test_concurrent_requests_share_route_table() {
    let server = MockServer::start(node_routes()).await.unwrap();
    let client = server.client().clone();

    let requests = (0..32).map(|i| {
        let client = client.clone();
        async move {
            if i % 2 == 0 {
                client.get_text("/chain/height").await
            } else {
                client.get_text(&format!("/transaction/status?hash={i}&group=confirmed")).await
            }
        }
    });

    for (i, result) in join_all(requests).await.into_iter().enumerate() {
        let body = validate_resp(result);
        if i % 2 == 0 {
            assert_eq!(body, CHAIN_HEIGHT_JSON);
        } else {
            assert_eq!(body, TRANSACTION_STATUS_JSON);
        }
    }

    server.teardown().await;
}

#[tokio::test]
async fn test_teardown_releases_listener() {
    let server = MockServer::start(node_routes()).await.unwrap();
    let url = format!("{}/chain/height", server.url());

    server.teardown().await;

    let client = reqwest::Client::builder().timeout(Duration::from_secs(2)).build().unwrap();
    assert!(client.get(&url).send().await.is_err(), "listener should be closed after teardown");
}

#[tokio::test]
async fn test_bounded_lifetime_stops_server() {
    let server = MockServer::builder()
        .with_routes(node_routes())
        .with_lifetime(Duration::from_millis(200))
        .start()
        .await
        .unwrap();

    let response = reqwest::get(format!("{}/chain/height", server.url())).await.unwrap();
    RawResponse::read(response).await.unwrap().assert_ok(CHAIN_HEIGHT_JSON);

    let stopped = tokio::time::timeout(Duration::from_secs(5), server.wait_stopped()).await;
    assert!(stopped.is_ok(), "server should stop after its lifetime");
}

#[tokio::test]
async fn test_dropping_server_releases_listener() {
    let url = {
        let server = MockServer::start(node_routes()).await.unwrap();
        format!("{}/chain/height", server.url())
    };

    // Drop only signals the stop, give the accept loop a moment to exit
    tokio::time::sleep(Duration::from_millis(200)).await;

    let client = reqwest::Client::builder().timeout(Duration::from_secs(2)).build().unwrap();
    assert!(client.get(&url).send().await.is_err());
}

#[tokio::test]
async fn test_idle_server_expires_without_traffic() {
    let server = MockServer::builder()
        .with_routes(node_routes())
        .with_lifetime(Duration::from_millis(200))
        .start()
        .await
        .unwrap();
    let url = format!("{}/chain/height", server.url());

    let stopped = tokio::time::timeout(Duration::from_secs(5), server.wait_stopped()).await;
    assert!(stopped.is_ok(), "idle server should stop after its lifetime");

    let client = reqwest::Client::builder().timeout(Duration::from_secs(2)).build().unwrap();
    assert!(client.get(&url).send().await.is_err());
}
