// Mutations are split by entity and merged into a single root.

mod actor;
mod movie;
mod relay;

use async_graphql::*;

/// Main mutation root that combines all mutation submodules
#[derive(Default, MergedObject)]
pub struct Mutation(
    pub actor::ActorMutation,
    pub movie::MovieMutation,
    pub relay::RelayMutation,
);
