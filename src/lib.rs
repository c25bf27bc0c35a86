pub mod app_context;
pub mod config;
pub mod database;
pub mod errors;
pub mod global_id;
pub mod graphql;
pub mod server;
pub mod services;
