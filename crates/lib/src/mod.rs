pub mod client;
pub mod config;
pub mod constant;
pub mod error;
pub mod log;
pub mod mock;
pub mod network;
pub mod uint64;
pub use client::{setup, setup_with_address, Client};
pub use config::Config;
pub use error::SdkError;
pub use mock::{MockServer, Route, RouteTable};
pub use network::NetworkType;
pub use uint64::{big_integer_to_hex, decimal_to_hex};
