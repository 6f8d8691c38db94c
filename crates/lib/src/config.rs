use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};
use url::Url;

use crate::{
    constant::{BASE_URL_ENV, DEFAULT_REQUEST_TIMEOUT_SECS},
    error::SdkError,
    network::NetworkType,
};

/// Client configuration: which node to talk to and which network it serves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: Url,
    pub network_type: NetworkType,
    pub request_timeout: Duration,
}

/// On-disk layout of the `[sdk]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdkConfigFile {
    pub sdk: SdkSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdkSection {
    pub base_url: Option<String>,
    pub network_type: NetworkType,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

// We'll always prioritize the environment variable over the config value
pub(crate) fn get_value_by_priority(env_var: &str, config_value: Option<String>) -> Option<String> {
    std::env::var(env_var).ok().or(config_value)
}

impl Config {
    pub fn new(base_url: &str, network_type: NetworkType) -> Result<Self, SdkError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            network_type,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Resolve `path` against the base URL, keeping any base path prefix
    pub fn endpoint(&self, path: &str) -> Result<Url, SdkError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/')).map_err(Into::into)
    }

    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SdkError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SdkError::ConfigError(format!("Failed to read config file: {e}"))
        })?;

        let file: SdkConfigFile = toml::from_str(&contents).map_err(|e| {
            SdkError::ConfigError(format!("Failed to parse config file: {e}"))
        })?;

        Self::from_section(file.sdk)
    }

    fn from_section(section: SdkSection) -> Result<Config, SdkError> {
        let base_url = get_value_by_priority(BASE_URL_ENV, section.base_url).ok_or_else(|| {
            SdkError::ConfigError(format!("No base_url configured and {BASE_URL_ENV} is unset"))
        })?;

        Ok(Config::new(&base_url, section.network_type)?
            .with_request_timeout(Duration::from_secs(section.request_timeout_secs)))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, SdkError> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SdkError::InvalidUrl(format!("Unsupported scheme '{other}' in {raw}"))),
    }
}
