use async_graphql::*;

use crate::database::entities::actors;
use crate::global_id::{self, NodeKind};
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::catalog_error_to_graphql_error;
use crate::graphql::types::Movie;
use crate::services::ActorQuery;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Actor {
    /// Relay global id
    pub id: ID,
    pub database_id: i32,
    pub name: String,
}

impl From<actors::Model> for Actor {
    fn from(model: actors::Model) -> Self {
        Self {
            id: ID(global_id::encode(NodeKind::Actor, model.id)),
            database_id: model.id,
            name: model.name,
        }
    }
}

#[ComplexObject]
impl Actor {
    /// Movies this actor appears in
    async fn movies(&self, ctx: &Context<'_>) -> Result<Vec<Movie>> {
        let context = ctx.data::<GraphQLContext>()?;
        let movies = context
            .actor_service()
            .movies_for_actor(self.database_id)
            .await
            .map_err(catalog_error_to_graphql_error)?;

        Ok(movies.into_iter().map(Movie::from).collect())
    }
}

#[derive(InputObject)]
pub struct ActorInput {
    /// Ignored on create and update; the target comes from the mutation arguments
    pub id: Option<ID>,
    pub name: String,
}

/// Reference to an existing actor by primary key or global id
#[derive(InputObject, Clone)]
pub struct ActorRefInput {
    pub id: ID,
}

#[derive(InputObject, Default)]
pub struct ActorFilter {
    /// Exact name match
    pub name: Option<String>,
    /// Case-insensitive name prefix
    pub name_starts_with: Option<String>,
}

impl From<ActorFilter> for ActorQuery {
    fn from(filter: ActorFilter) -> Self {
        Self {
            name: filter.name,
            name_starts_with: filter.name_starts_with,
        }
    }
}
