use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::{ActorService, MovieService};

/// Shared application context exposing the catalog services to the GraphQL layer.
#[derive(Clone)]
pub struct AppContext {
    db: DatabaseConnection,
    actor_service: Arc<ActorService>,
    movie_service: Arc<MovieService>,
}

impl AppContext {
    pub fn new(db: DatabaseConnection) -> Self {
        let actor_service = Arc::new(ActorService::new(db.clone()));
        let movie_service = Arc::new(MovieService::new(db.clone()));

        Self {
            db,
            actor_service,
            movie_service,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn actor_service(&self) -> &Arc<ActorService> {
        &self.actor_service
    }

    pub fn movie_service(&self) -> &Arc<MovieService> {
        &self.movie_service
    }
}
