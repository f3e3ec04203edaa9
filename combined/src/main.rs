//! Combined binary for development - runs both services in one process.

use clap::{Parser, Subcommand};
use tracing::{error, info};

use resolver_service_lib::config::Backend;

#[derive(Parser)]
#[command(name = "users-demo")]
#[command(about = "Directory and resolver services in one process")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both services in a single process (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value_t = directory_service_lib::config::DEFAULT_PORT)]
        directory_port: u16,
        #[arg(long, default_value_t = resolver_service_lib::config::DEFAULT_PORT)]
        resolver_port: u16,
        #[arg(long, env = "RESOLVER_BACKEND", value_enum, default_value_t = Backend::Canned)]
        backend: Backend,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    common::init_tracing(cli.verbose, "info,tower_http=debug");

    match cli.command {
        Commands::Serve {
            host,
            directory_port,
            resolver_port,
            backend,
        } => {
            info!("Starting combined services in development mode");
            info!("  Directory (REST):    http://{}:{}/", host, directory_port);
            info!("  Resolver (GraphQL):  http://{}:{}/graphql", host, resolver_port);

            let directory_host = host.clone();
            let directory_handle = tokio::spawn(async move {
                if let Err(e) =
                    directory_service_lib::run_embedded(&directory_host, directory_port).await
                {
                    error!("Directory service failed: {}", e);
                }
            });

            let resolver_host = host.clone();
            let resolver_handle = tokio::spawn(async move {
                if let Err(e) =
                    resolver_service_lib::run_embedded(&resolver_host, resolver_port, backend)
                        .await
                {
                    error!("Resolver service failed: {}", e);
                }
            });

            // Either service exiting means something went wrong
            tokio::select! {
                _ = directory_handle => {
                    error!("Directory service exited unexpectedly");
                }
                _ = resolver_handle => {
                    error!("Resolver service exited unexpectedly");
                }
            }
        }
    }

    Ok(())
}
