use async_graphql::*;

use crate::database::entities::{actors, movies};
use crate::graphql::types::{Actor, Movie};

/// Result of an actor mutation: `ok` is false and `actor` null when the
/// target actor does not exist.
#[derive(SimpleObject, Clone, Debug)]
pub struct ActorPayload {
    pub ok: bool,
    pub actor: Option<Actor>,
}

impl ActorPayload {
    pub fn from_model(model: Option<actors::Model>) -> Self {
        Self {
            ok: model.is_some(),
            actor: model.map(Actor::from),
        }
    }

    pub fn with_client_mutation_id(self, client_mutation_id: Option<String>) -> RelayActorPayload {
        RelayActorPayload {
            ok: self.ok,
            actor: self.actor,
            client_mutation_id,
        }
    }
}

/// Result of a movie mutation: `ok` is false and `movie` null when the
/// target movie or any referenced actor does not exist.
#[derive(SimpleObject, Clone, Debug)]
pub struct MoviePayload {
    pub ok: bool,
    pub movie: Option<Movie>,
}

impl MoviePayload {
    pub fn from_model(model: Option<movies::Model>) -> Self {
        Self {
            ok: model.is_some(),
            movie: model.map(Movie::from),
        }
    }

    pub fn with_client_mutation_id(self, client_mutation_id: Option<String>) -> RelayMoviePayload {
        RelayMoviePayload {
            ok: self.ok,
            movie: self.movie,
            client_mutation_id,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct RelayActorPayload {
    pub ok: bool,
    pub actor: Option<Actor>,
    /// Echo of the request's `clientMutationId`
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject, Clone, Debug)]
pub struct RelayMoviePayload {
    pub ok: bool,
    pub movie: Option<Movie>,
    pub client_mutation_id: Option<String>,
}
