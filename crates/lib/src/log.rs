use clap::{Parser, ValueEnum};

pub const DEFAULT_LOG_FILTER: &str = "info,jsonrpsee_server=warn,hyper=warn";

#[derive(Parser, Debug, Clone, ValueEnum)]
pub enum LoggingFormat {
    Standard,
    Json,
}

/// Install the global fmt subscriber; `RUST_LOG` overrides the default filter
pub fn setup_logging(format: &LoggingFormat) {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter);
    match format {
        LoggingFormat::Standard => subscriber.init(),
        LoggingFormat::Json => subscriber.json().init(),
    }
}
