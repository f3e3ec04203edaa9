//! Directory Service - REST listing of the seeded users.

use clap::{Parser, Subcommand};

use directory_service_lib::config::DEFAULT_PORT;

#[derive(Parser)]
#[command(name = "directory-service")]
#[command(about = "Read-only user directory over REST")]
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
        #[arg(long, env = "DIRECTORY_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "DIRECTORY_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    common::init_tracing(cli.verbose, "info,tower_http=debug");

    match cli.command {
        Commands::Serve { host, port } => {
            directory_service_lib::run_embedded(&host, port).await?;
        }
    }

    Ok(())
}
