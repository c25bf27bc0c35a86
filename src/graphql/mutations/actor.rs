use async_graphql::*;
use tracing::debug;

use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::catalog_error_to_graphql_error;
use crate::graphql::types::{ActorInput, ActorPayload};

#[derive(Default)]
pub struct ActorMutation;

#[Object]
impl ActorMutation {
    /// Create a new actor
    async fn create_actor(&self, ctx: &Context<'_>, input: ActorInput) -> Result<ActorPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let actor = context
            .actor_service()
            .create_actor(input.name)
            .await
            .map_err(catalog_error_to_graphql_error)?;

        Ok(ActorPayload::from_model(Some(actor)))
    }

    /// Rename an existing actor
    async fn update_actor(
        &self,
        ctx: &Context<'_>,
        id: i32,
        input: ActorInput,
    ) -> Result<ActorPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        let actor = context
            .actor_service()
            .update_actor(id, input.name)
            .await
            .map_err(catalog_error_to_graphql_error)?;

        if actor.is_none() {
            debug!(actor_id = id, "updateActor target missing");
        }

        Ok(ActorPayload::from_model(actor))
    }
}
