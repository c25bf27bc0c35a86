use async_graphql::*;

use crate::global_id::{self, NodeKind};
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::catalog_error_to_graphql_error;
use crate::graphql::types::{
    draft, ActorPayload, ActorRefInput, MoviePayload, RelayActorPayload, RelayMoviePayload,
};

#[derive(InputObject)]
pub struct RelayCreateActorInput {
    pub name: String,
    pub client_mutation_id: Option<String>,
}

#[derive(InputObject)]
pub struct RelayUpdateActorInput {
    /// Global id or primary key of the actor
    pub id: ID,
    pub name: String,
    pub client_mutation_id: Option<String>,
}

#[derive(InputObject)]
pub struct RelayCreateMovieInput {
    pub title: String,
    pub year: i32,
    pub actors: Option<Vec<ActorRefInput>>,
    pub client_mutation_id: Option<String>,
}

#[derive(InputObject)]
pub struct RelayUpdateMovieInput {
    /// Global id or primary key of the movie
    pub id: ID,
    pub title: String,
    pub year: i32,
    pub actors: Option<Vec<ActorRefInput>>,
    pub client_mutation_id: Option<String>,
}

/// Relay client-mutation-id variants of the catalog mutations
#[derive(Default)]
pub struct RelayMutation;

#[Object]
impl RelayMutation {
    async fn relay_create_actor(
        &self,
        ctx: &Context<'_>,
        input: RelayCreateActorInput,
    ) -> Result<RelayActorPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let actor = context
            .actor_service()
            .create_actor(input.name)
            .await
            .map_err(catalog_error_to_graphql_error)?;

        Ok(ActorPayload::from_model(Some(actor)).with_client_mutation_id(input.client_mutation_id))
    }

    async fn relay_update_actor(
        &self,
        ctx: &Context<'_>,
        input: RelayUpdateActorInput,
    ) -> Result<RelayActorPayload> {
        let Some(id) = global_id::parse_key(input.id.as_str(), NodeKind::Actor) else {
            return Ok(ActorPayload::from_model(None)
                .with_client_mutation_id(input.client_mutation_id));
        };

        let context = ctx.data::<GraphQLContext>()?;
        let actor = context
            .actor_service()
            .update_actor(id, input.name)
            .await
            .map_err(catalog_error_to_graphql_error)?;

        Ok(ActorPayload::from_model(actor).with_client_mutation_id(input.client_mutation_id))
    }

    async fn relay_create_movie(
        &self,
        ctx: &Context<'_>,
        input: RelayCreateMovieInput,
    ) -> Result<RelayMoviePayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let outcome = context
            .movie_service()
            .create_movie(draft(input.title, input.year, input.actors))
            .await
            .map_err(catalog_error_to_graphql_error)?;

        Ok(MoviePayload::from_model(outcome.into_movie())
            .with_client_mutation_id(input.client_mutation_id))
    }

    async fn relay_update_movie(
        &self,
        ctx: &Context<'_>,
        input: RelayUpdateMovieInput,
    ) -> Result<RelayMoviePayload> {
        let Some(id) = global_id::parse_key(input.id.as_str(), NodeKind::Movie) else {
            return Ok(MoviePayload::from_model(None)
                .with_client_mutation_id(input.client_mutation_id));
        };

        let context = ctx.data::<GraphQLContext>()?;
        let outcome = context
            .movie_service()
            .update_movie(id, draft(input.title, input.year, input.actors))
            .await
            .map_err(catalog_error_to_graphql_error)?;

        Ok(MoviePayload::from_model(outcome.into_movie())
            .with_client_mutation_id(input.client_mutation_id))
    }
}
