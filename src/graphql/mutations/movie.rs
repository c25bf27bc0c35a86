use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::catalog_error_to_graphql_error;
use crate::graphql::types::{MovieInput, MoviePayload};
use crate::services::MovieDraft;

#[derive(Default)]
pub struct MovieMutation;

#[Object]
impl MovieMutation {
    /// Create a movie with its cast
    async fn create_movie(&self, ctx: &Context<'_>, input: MovieInput) -> Result<MoviePayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let outcome = context
            .movie_service()
            .create_movie(MovieDraft::from(input))
            .await
            .map_err(catalog_error_to_graphql_error)?;

        Ok(MoviePayload::from_model(outcome.into_movie()))
    }

    /// Overwrite a movie's title, year and cast
    async fn update_movie(
        &self,
        ctx: &Context<'_>,
        id: i32,
        input: MovieInput,
    ) -> Result<MoviePayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let outcome = context
            .movie_service()
            .update_movie(id, MovieDraft::from(input))
            .await
            .map_err(catalog_error_to_graphql_error)?;

        Ok(MoviePayload::from_model(outcome.into_movie()))
    }
}
