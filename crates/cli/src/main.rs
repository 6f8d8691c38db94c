mod args;

use args::{GlobalArgs, ServeArgs};
use clap::{Parser, Subcommand};
use std::time::Duration;
use xpx_sdk::{
    log::setup_logging,
    mock::{MockServer, RouteTable},
    uint64::decimal_to_hex,
};

#[derive(Subcommand)]
enum Commands {
    /// Serve a route table until Ctrl+C or lifetime expiry
    Serve {
        #[command(flatten)]
        serve_args: Box<ServeArgs>,
    },
    /// Print the uint64 hex form of a base-10 integer literal
    Hex {
        /// Decimal literal, may be negative or wider than 64 bits
        #[arg(allow_hyphen_values = true)]
        literal: String,
    },
}

#[derive(Parser)]
#[command(author, version, about = "xpx-mock - mock Sirius node for SDK tests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { serve_args }) => {
            setup_logging(&cli.global_args.logging_format);
            serve(*serve_args).await?;
        }
        Some(Commands::Hex { literal }) => match decimal_to_hex(&literal) {
            Ok(hex) => println!("{hex}"),
            Err(e) => {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        },
        None => {
            println!("No command specified. Use --help for usage information.");
            println!("Available commands:");
            println!("  serve   - Serve a mock route table");
            println!("  hex     - Encode a decimal literal as uint64 hex");
        }
    }

    Ok(())
}

async fn serve(args: ServeArgs) -> Result<(), anyhow::Error> {
    let routes = RouteTable::load(&args.routes).unwrap_or_else(|e| {
        print_error(&format!("Failed to load routes: {e}"));
        std::process::exit(1);
    });

    for path in routes.paths() {
        log::info!("Registered mock route {path}");
    }

    let server = MockServer::builder()
        .with_routes(routes)
        .with_port(args.port)
        .with_lifetime(Duration::from_secs(args.lifetime_secs))
        .with_network_type(args.network_type)
        .start()
        .await?;

    println!("Mock server listening on {}", server.url());

    let interrupted = tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                log::error!("Error waiting for Ctrl+C signal: {e:?}");
            }
            true
        }
        _ = server.wait_stopped() => false,
    };

    if interrupted {
        println!("Shutting down mock server...");
        server.teardown().await;
    } else {
        println!("Mock server lifetime elapsed");
    }

    Ok(())
}

fn print_error(message: &str) {
    eprintln!("Error: {message}");
}
