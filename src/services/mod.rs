pub mod actor_service;
pub mod filters;
pub mod movie_service;

pub use actor_service::ActorService;
pub use filters::{ActorQuery, MovieQuery};
pub use movie_service::{ActorRef, ActorResolution, MovieDraft, MovieService, MovieWriteOutcome};
