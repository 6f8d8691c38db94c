use jsonrpsee::{
    server::{ServerBuilder, ServerHandle},
    RpcModule,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::task::JoinHandle;

use crate::{
    client::Client,
    config::Config,
    constant::{MOCK_SERVER_HOST, MOCK_SERVER_LIFETIME, MOCK_SERVER_WAKE_INTERVAL},
    error::SdkError,
    mock::{route::RouteTable, router::MockRouterLayer},
    network::NetworkType,
};

pub struct MockServerBuilder {
    routes: RouteTable,
    port: u16,
    lifetime: Duration,
    network_type: NetworkType,
}

impl Default for MockServerBuilder {
    fn default() -> Self {
        Self {
            routes: RouteTable::default(),
            port: 0,
            lifetime: MOCK_SERVER_LIFETIME,
            network_type: NetworkType::TestNet,
        }
    }
}

impl MockServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_routes(mut self, routes: impl Into<RouteTable>) -> Self {
        self.routes = routes.into();
        self
    }

    /// Port 0 picks a free port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_network_type(mut self, network_type: NetworkType) -> Self {
        self.network_type = network_type;
        self
    }

    pub async fn start(self) -> Result<MockServer, SdkError> {
        let addr = SocketAddr::from((MOCK_SERVER_HOST, self.port));
        let routes = Arc::new(self.routes);

        let middleware =
            tower::ServiceBuilder::new().layer(MockRouterLayer::new(Arc::clone(&routes)));

        let server =
            ServerBuilder::default().set_middleware(middleware).http_only().build(addr).await?;
        let local_addr = server.local_addr()?;

        // Every request is answered by the router layer, the module stays empty
        let handle = server.start(RpcModule::new(())).map_err(|e| {
            SdkError::InternalServerError(format!("Failed to start mock server: {e}"))
        })?;

        let url = format!("http://{local_addr}");
        let client = Client::new(None, Config::new(&url, self.network_type)?)?;

        log::info!(
            "Mock server started on {url} with {} routes, lifetime {:?}",
            routes.len(),
            self.lifetime
        );

        let expiry = spawn_expiry(handle.clone(), local_addr, self.lifetime);

        Ok(MockServer { handle, expiry: Some(expiry), local_addr, url, client, routes })
    }
}

fn spawn_expiry(handle: ServerHandle, addr: SocketAddr, lifetime: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(lifetime).await;
        log::warn!("Mock server {addr} reached its {lifetime:?} lifetime, shutting down");
        if handle.stop().is_err() {
            log::debug!("Mock server {addr} was already stopped");
        }
        wait_for_shutdown(handle, addr).await;
    })
}

/// The jsonrpsee accept loop only notices a stop request when it wakes up, so
/// an idle server is nudged with throwaway connections until it has exited.
async fn wait_for_shutdown(handle: ServerHandle, addr: SocketAddr) {
    let stopped = handle.stopped();
    tokio::pin!(stopped);

    loop {
        wake_accept_loop(addr).await;
        if tokio::time::timeout(MOCK_SERVER_WAKE_INTERVAL, &mut stopped).await.is_ok() {
            return;
        }
    }
}

async fn wake_accept_loop(addr: SocketAddr) {
    if let Err(e) = tokio::net::TcpStream::connect(addr).await {
        log::debug!("Mock server {addr} no longer accepting: {e}");
    }
}

/// A running mock node. The listener is released on `teardown`, on drop, or
/// when the configured lifetime elapses, whichever comes first.
pub struct MockServer {
    handle: ServerHandle,
    expiry: Option<JoinHandle<()>>,
    local_addr: SocketAddr,
    url: String,
    client: Client,
    routes: Arc<RouteTable>,
}

impl MockServer {
    pub fn builder() -> MockServerBuilder {
        MockServerBuilder::new()
    }

    /// Start with `routes` and the default five minute lifetime
    pub async fn start(routes: impl Into<RouteTable>) -> Result<Self, SdkError> {
        MockServerBuilder::new().with_routes(routes).start().await
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Client already pointed at this server
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Resolves once the listener has been released. This only happens through
    /// the lifetime timer or another handle; it does not request a stop itself.
    pub async fn wait_stopped(&self) {
        self.handle.clone().stopped().await
    }

    pub async fn teardown(mut self) {
        self.release();
        wait_for_shutdown(self.handle.clone(), self.local_addr).await;
        log::info!("Mock server {} torn down", self.url);
    }

    fn release(&mut self) {
        if let Some(expiry) = self.expiry.take() {
            expiry.abort();
        }
        // Already stopped by the lifetime timer is fine
        let _ = self.handle.stop();
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.release();
        // Outside a runtime the accept loop is gone with it
        if let Ok(runtime) = tokio::runtime::Handle::try_current() {
            runtime.spawn(wait_for_shutdown(self.handle.clone(), self.local_addr));
        }
    }
}
