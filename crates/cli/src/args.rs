use clap::Parser;
use std::path::PathBuf;
use xpx_sdk::{log::LoggingFormat, network::NetworkType};

/// Global arguments used by all subcommands
#[derive(Debug, Parser)]
#[command(name = "xpx-mock")]
pub struct GlobalArgs {
    /// Output format for logs (standard or json)
    #[arg(long, global = true, default_value = "standard")]
    pub logging_format: LoggingFormat,
}

/// Mock server arguments
#[derive(Debug, Parser)]
pub struct ServeArgs {
    /// Route table describing the mocked endpoints (TOML format)
    #[arg(long, env = "XPX_MOCK_ROUTES")]
    pub routes: PathBuf,

    /// HTTP port to listen on, 0 picks a free port
    #[arg(short = 'p', long, default_value = "0")]
    pub port: u16,

    /// Seconds before the server shuts itself down
    #[arg(long, default_value = "300")]
    pub lifetime_secs: u64,

    /// Network identifier reported by the server's client
    #[arg(long, default_value = "TestNet")]
    pub network_type: NetworkType,
}
