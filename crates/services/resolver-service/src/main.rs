//! Resolver Service - GraphQL users operations.

use clap::{Parser, Subcommand};

use resolver_service_lib::config::{Backend, DEFAULT_PORT};

#[derive(Parser)]
#[command(name = "resolver-service")]
#[command(about = "GraphQL users resolver")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "RESOLVER_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "RESOLVER_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        #[arg(long, env = "RESOLVER_BACKEND", value_enum, default_value_t = Backend::Canned)]
        backend: Backend,
    },
    /// Print the schema SDL
    Schema,
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
            port,
            backend,
        } => {
            resolver_service_lib::run_embedded(&host, port, backend).await?;
        }
        Commands::Schema => {
            print!("{}", resolver_service_lib::graphql::SCHEMA_SDL);
        }
    }

    Ok(())
}
