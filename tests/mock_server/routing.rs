use tests::common::*;
use xpx_sdk::mock::{MockServer, Route, RouteTable};

#[tokio::test]
async fn test_registered_route_returns_canned_body() {
    let server = MockServer::start(node_routes()).await.unwrap();

    let response = reqwest::get(format!("{}/chain/height", server.url())).await.unwrap();
    RawResponse::read(response).await.unwrap().assert_ok(CHAIN_HEIGHT_JSON);

    server.teardown().await;
}

#[tokio::test]
async fn test_unregistered_path_reports_not_found() {
    let server = MockServer::start(RouteTable::default()).await.unwrap();

    let response = reqwest::get(format!("{}/foo", server.url())).await.unwrap();
    let raw = RawResponse::read(response).await.unwrap();
    assert_eq!(raw.status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(raw.body, "/foo not found in mock routers");

    server.teardown().await;
}

#[tokio::test]
async fn test_subtree_route_serves_any_account() {
    let server = MockServer::start(node_routes()).await.unwrap();

    let addresses =
        ["SAONSOGFZZHNEIBRYXHDTDTBR2YSAXKTITRFHG2Y", "VD5AMK2EOHZ5HDB2QNKPIDRB2OXTRULWRIJH3U5L"];
    for address in addresses {
        let response =
            reqwest::get(format!("{}/account/{address}", server.url())).await.unwrap();
        RawResponse::read(response).await.unwrap().assert_ok(ACCOUNT_INFO_JSON);
    }

    server.teardown().await;
}

#[tokio::test]
async fn test_method_is_not_part_of_matching() {
    let server =
        MockServer::start(RouteTable::from([("/node/info", Route::new("{\"role\":2}"))]))
            .await
            .unwrap();

    let client = reqwest::Client::new();
    let url = format!("{}/node/info", server.url());
    for request in [client.get(&url), client.post(&url), client.put(&url), client.delete(&url)] {
        let response = request.send().await.unwrap();
        RawResponse::read(response).await.unwrap().assert_ok("{\"role\":2}");
    }

    server.teardown().await;
}
