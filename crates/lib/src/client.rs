use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::Config,
    constant::{DEFAULT_TEST_NODE_URL, TEST_NODE_URL_ENV},
    error::SdkError,
    network::NetworkType,
};

/// HTTP client bound to a single node
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Build a client; with no `http` client a default one honouring the config timeout is used
    pub fn new(http: Option<reqwest::Client>, config: Config) -> Result<Self, SdkError> {
        let http = match http {
            Some(http) => http,
            None => reqwest::Client::builder().timeout(config.request_timeout).build()?,
        };
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn network_type(&self) -> NetworkType {
        self.config.network_type
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }

    pub async fn get_text(&self, path: &str) -> Result<String, SdkError> {
        let url = self.config.endpoint(path)?;
        log::debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        read_text(response).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SdkError> {
        let body = self.get_text(path).await?;
        serde_json::from_str(&body).map_err(Into::into)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, SdkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path)?;
        log::debug!("POST {url}");
        let response = self.http.post(url).json(body).send().await?;
        let text = read_text(response).await?;
        serde_json::from_str(&text).map_err(Into::into)
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<String, SdkError> {
        let url = self.config.endpoint(path)?;
        log::debug!("POST form {url}");
        let response = self.http.post(url).form(fields).send().await?;
        read_text(response).await
    }
}

async fn read_text(response: Response) -> Result<String, SdkError> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        log::debug!("Node answered {status}: {body}");
        Err(http_status_error(status, body))
    }
}

fn http_status_error(status: StatusCode, body: String) -> SdkError {
    SdkError::HttpStatus { status: status.as_u16(), body }
}

/// Client for a node at `address` on the test network
pub fn setup_with_address(address: &str) -> Result<Client, SdkError> {
    let config = Config::new(address, NetworkType::TestNet)?;
    Client::new(None, config)
}

/// Client for the node named by `XPX_TEST_NODE_URL` (falls back to a local node)
pub fn setup() -> Result<(Client, String), SdkError> {
    let address = default_test_node_url();
    let client = setup_with_address(&address)?;
    Ok((client, address))
}

pub fn default_test_node_url() -> String {
    dotenv::dotenv().ok();
    std::env::var(TEST_NODE_URL_ENV).unwrap_or_else(|_| DEFAULT_TEST_NODE_URL.to_string())
}
