use async_graphql::*;

use crate::database::entities::movies;
use crate::global_id::{self, NodeKind};
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::catalog_error_to_graphql_error;
use crate::graphql::types::{Actor, ActorRefInput};
use crate::services::{ActorRef, MovieDraft, MovieQuery};

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Movie {
    /// Relay global id
    pub id: ID,
    pub database_id: i32,
    pub title: String,
    pub year: i32,
}

impl From<movies::Model> for Movie {
    fn from(model: movies::Model) -> Self {
        Self {
            id: ID(global_id::encode(NodeKind::Movie, model.id)),
            database_id: model.id,
            title: model.title,
            year: model.year,
        }
    }
}

#[ComplexObject]
impl Movie {
    /// Actors credited in this movie
    async fn actors(&self, ctx: &Context<'_>) -> Result<Vec<Actor>> {
        let context = ctx.data::<GraphQLContext>()?;
        let actors = context
            .movie_service()
            .actors_for_movie(self.database_id)
            .await
            .map_err(catalog_error_to_graphql_error)?;

        Ok(actors.into_iter().map(Actor::from).collect())
    }
}

#[derive(InputObject)]
pub struct MovieInput {
    /// Ignored on create and update; the target comes from the mutation arguments
    pub id: Option<ID>,
    pub title: String,
    pub year: i32,
    /// Full replacement cast; omitted means no actors
    pub actors: Option<Vec<ActorRefInput>>,
}

impl From<MovieInput> for MovieDraft {
    fn from(input: MovieInput) -> Self {
        draft(input.title, input.year, input.actors)
    }
}

pub(crate) fn draft(title: String, year: i32, actors: Option<Vec<ActorRefInput>>) -> MovieDraft {
    MovieDraft {
        title,
        year,
        actors: actors
            .unwrap_or_default()
            .iter()
            .map(|actor| ActorRef::parse(actor.id.as_str()))
            .collect(),
    }
}

#[derive(InputObject, Default)]
pub struct MovieFilter {
    /// Exact title match
    pub title: Option<String>,
    /// Case-insensitive title prefix
    pub title_starts_with: Option<String>,
    /// Case-insensitive title substring
    pub title_contains: Option<String>,
    pub year: Option<i32>,
}

impl From<MovieFilter> for MovieQuery {
    fn from(filter: MovieFilter) -> Self {
        Self {
            title: filter.title,
            title_starts_with: filter.title_starts_with,
            title_contains: filter.title_contains,
            year: filter.year,
        }
    }
}
