use std::sync::Arc;

use crate::app_context::AppContext;
use crate::services::{ActorService, MovieService};

#[derive(Clone)]
pub struct GraphQLContext {
    pub app: Arc<AppContext>,
}

impl GraphQLContext {
    pub fn new(app: Arc<AppContext>) -> Self {
        Self { app }
    }

    pub fn actor_service(&self) -> Arc<ActorService> {
        Arc::clone(self.app.actor_service())
    }

    pub fn movie_service(&self) -> Arc<MovieService> {
        Arc::clone(self.app.movie_service())
    }
}
