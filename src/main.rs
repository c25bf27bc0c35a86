use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cinegraph::config::CatalogConfig;
use cinegraph::server::{self, MigrateDirection};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    /// TOML configuration file
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the GraphQL server
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        database: Option<String>,
        #[clap(long)]
        cors_origin: Option<String>,
    },
    /// Apply or roll back schema migrations
    Migrate {
        #[clap(subcommand)]
        direction: MigrateDirection,
        #[clap(short, long)]
        database: Option<String>,
    },
    /// Load an example catalog into an empty database
    Seed {
        #[clap(short, long)]
        database: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let mut config = CatalogConfig::load(args.config.as_deref())?;

    if args.log_level.is_some() {
        config.log_level = args.log_level.clone();
    }
    setup_logging(config.log_level());

    match args.command {
        Command::Serve {
            port,
            database,
            cors_origin,
        } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(database) = database {
                config.database.path = database;
            }
            if cors_origin.is_some() {
                config.server.cors_origin = cors_origin;
            }

            info!("Starting server on port {}", config.server.port);
            server::start_server(&config).await?;
        }
        Command::Migrate {
            direction,
            database,
        } => {
            let database = database.unwrap_or(config.database.path);
            server::migrate_database(&database, direction).await?;
        }
        Command::Seed { database } => {
            let database = database.unwrap_or(config.database.path);
            server::seed_database(&database).await?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    let log_level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sqlx=warn,{}", log_level)))
        .init();
}
