use std::net::IpAddr;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use qna_cli::config::Config;

#[derive(Parser)]
#[command(name = "qna")]
#[command(about = "QnA tag catalog server")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the tag catalog over HTTP (default)
    Serve {
        /// Listen port (overrides QNA_API_PORT)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        port: Option<u16>,
        /// Bind address (overrides QNA_API_HOST)
        #[arg(long)]
        host: Option<IpAddr>,
        /// SQLite database file (overrides QNA_DATABASE_PATH)
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    qna_cli::init_tracing();

    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(2);
        }
    };

    match cli.command.unwrap_or(Commands::Serve {
        port: None,
        host: None,
        database: None,
    }) {
        Commands::Serve {
            port,
            host,
            database,
        } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(database) = database {
                config.database_path = database;
            }

            if let Err(e) = qna_cli::run_server(config).await {
                eprintln!("Error: {:#}", e);
                process::exit(1);
            }
        }
    }
}
