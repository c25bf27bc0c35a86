pub mod app;
pub mod handlers;

use anyhow::Result;
use clap::Subcommand;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::CatalogConfig;
use crate::database::{connection::*, migrations::Migrator};

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateDirection {
    Up,
    /// Roll back every applied migration
    Down,
    /// Roll back and re-apply
    Fresh,
}

pub async fn start_server(config: &CatalogConfig) -> Result<()> {
    let database_url = get_database_url(Some(&config.database.path));
    let db = establish_connection(&database_url).await?;

    setup_database(&db).await?;

    let app = app::create_app(db, config.server.cors_origin.as_deref()).await?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.server.port)).await?;
    info!("Server running on http://0.0.0.0:{}", config.server.port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    info!("  /graphql                    - GraphQL API (POST) & Playground (GET)");
}

pub async fn migrate_database(database_path: &str, direction: MigrateDirection) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    match direction {
        MigrateDirection::Up => {
            info!("Running migrations up");
            Migrator::up(&db, None).await?;
        }
        MigrateDirection::Down => {
            info!("Running migrations down");
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Running fresh migrations (down then up)");
            Migrator::down(&db, None).await?;
            Migrator::up(&db, None).await?;
        }
    }

    info!("Database migration completed");
    Ok(())
}

pub async fn seed_database(database_path: &str) -> Result<()> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    setup_database(&db).await?;
    crate::database::seed_data::create_example_catalog(&db).await?;

    info!("Seed data created");
    Ok(())
}
