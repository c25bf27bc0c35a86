use std::collections::BTreeSet;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, warn};

use crate::database::entities::{actors, movie_actors, movies};
use crate::errors::CatalogResult;
use crate::global_id::{self, NodeKind};
use crate::services::filters::{paginate, MovieQuery};

/// A client's reference to an actor inside a movie payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActorRef {
    Key(i32),
    /// Neither a primary key nor an actor global id
    Malformed(String),
}

impl ActorRef {
    pub fn parse(raw: &str) -> Self {
        match global_id::parse_key(raw, NodeKind::Actor) {
            Some(id) => ActorRef::Key(id),
            None => ActorRef::Malformed(raw.to_string()),
        }
    }
}

impl std::fmt::Display for ActorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorRef::Key(id) => write!(f, "{}", id),
            ActorRef::Malformed(raw) => write!(f, "{:?}", raw),
        }
    }
}

#[derive(Debug)]
pub enum ActorResolution {
    Resolved(Vec<actors::Model>),
    /// First reference that did not resolve; later references were not looked up.
    Unresolved(ActorRef),
}

/// Scalar fields and cast of a movie as submitted by a client.
#[derive(Clone, Debug)]
pub struct MovieDraft {
    pub title: String,
    pub year: i32,
    pub actors: Vec<ActorRef>,
}

#[derive(Debug)]
pub enum MovieWriteOutcome {
    Saved(movies::Model),
    MovieNotFound(i32),
    ActorNotFound(ActorRef),
}

impl MovieWriteOutcome {
    pub fn into_movie(self) -> Option<movies::Model> {
        match self {
            MovieWriteOutcome::Saved(movie) => Some(movie),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct MovieService {
    db: DatabaseConnection,
}

impl MovieService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a movie by primary key
    pub async fn get_movie(&self, id: i32) -> CatalogResult<Option<movies::Model>> {
        let movie = movies::Entity::find_by_id(id).one(&self.db).await?;
        Ok(movie)
    }

    /// List movies matching `query`, ordered by id
    pub async fn list_movies(
        &self,
        query: &MovieQuery,
        offset: u64,
        limit: Option<u64>,
    ) -> CatalogResult<Vec<movies::Model>> {
        let select = movies::Entity::find()
            .filter(query.condition())
            .order_by_asc(movies::Column::Id);

        Ok(paginate(select, offset, limit).all(&self.db).await?)
    }

    pub async fn count_movies(&self, query: &MovieQuery) -> CatalogResult<u64> {
        let total = movies::Entity::find()
            .filter(query.condition())
            .count(&self.db)
            .await?;
        Ok(total)
    }

    /// Current cast of a movie
    pub async fn actors_for_movie(&self, movie_id: i32) -> CatalogResult<Vec<actors::Model>> {
        let actors = actors::Entity::find()
            .inner_join(movie_actors::Entity)
            .filter(movie_actors::Column::MovieId.eq(movie_id))
            .order_by_asc(actors::Column::Id)
            .all(&self.db)
            .await?;
        Ok(actors)
    }

    /// Look up every referenced actor in order, stopping at the first miss.
    pub async fn resolve_actors(&self, refs: &[ActorRef]) -> CatalogResult<ActorResolution> {
        let mut resolved = Vec::with_capacity(refs.len());

        for actor_ref in refs {
            let actor = match actor_ref {
                ActorRef::Key(id) => actors::Entity::find_by_id(*id).one(&self.db).await?,
                ActorRef::Malformed(_) => None,
            };

            match actor {
                Some(actor) => resolved.push(actor),
                None => {
                    warn!(actor_ref = %actor_ref, "Actor reference did not resolve");
                    return Ok(ActorResolution::Unresolved(actor_ref.clone()));
                }
            }
        }

        Ok(ActorResolution::Resolved(resolved))
    }

    /// Create a movie and attach its cast
    pub async fn create_movie(&self, draft: MovieDraft) -> CatalogResult<MovieWriteOutcome> {
        let cast = match self.resolve_actors(&draft.actors).await? {
            ActorResolution::Resolved(cast) => cast,
            ActorResolution::Unresolved(actor_ref) => {
                return Ok(MovieWriteOutcome::ActorNotFound(actor_ref))
            }
        };

        let txn = self.db.begin().await?;

        let movie = movies::ActiveModel {
            title: Set(draft.title),
            year: Set(draft.year),
            ..Default::default()
        };
        let movie = movie.insert(&txn).await?;

        // The movie needs its id before association rows can reference it
        replace_cast(&txn, movie.id, &cast).await?;
        txn.commit().await?;

        debug!(movie_id = movie.id, cast = cast.len(), "Created movie");
        Ok(MovieWriteOutcome::Saved(movie))
    }

    /// Overwrite a movie's title, year and cast
    pub async fn update_movie(&self, id: i32, draft: MovieDraft) -> CatalogResult<MovieWriteOutcome> {
        let Some(movie) = movies::Entity::find_by_id(id).one(&self.db).await? else {
            debug!(movie_id = id, "Movie not found for update");
            return Ok(MovieWriteOutcome::MovieNotFound(id));
        };

        let cast = match self.resolve_actors(&draft.actors).await? {
            ActorResolution::Resolved(cast) => cast,
            ActorResolution::Unresolved(actor_ref) => {
                return Ok(MovieWriteOutcome::ActorNotFound(actor_ref))
            }
        };

        let txn = self.db.begin().await?;

        let mut movie: movies::ActiveModel = movie.into();
        movie.title = Set(draft.title);
        movie.year = Set(draft.year);
        let movie = movie.update(&txn).await?;

        replace_cast(&txn, movie.id, &cast).await?;
        txn.commit().await?;

        debug!(movie_id = movie.id, cast = cast.len(), "Updated movie");
        Ok(MovieWriteOutcome::Saved(movie))
    }
}

/// Replace the whole association set of `movie_id` with `cast`.
async fn replace_cast<C>(conn: &C, movie_id: i32, cast: &[actors::Model]) -> CatalogResult<()>
where
    C: ConnectionTrait,
{
    movie_actors::Entity::delete_many()
        .filter(movie_actors::Column::MovieId.eq(movie_id))
        .exec(conn)
        .await?;

    let actor_ids: BTreeSet<i32> = cast.iter().map(|actor| actor.id).collect();
    if actor_ids.is_empty() {
        return Ok(());
    }

    let rows = actor_ids.into_iter().map(|actor_id| movie_actors::ActiveModel {
        movie_id: Set(movie_id),
        actor_id: Set(actor_id),
        ..Default::default()
    });

    movie_actors::Entity::insert_many(rows).exec(conn).await?;
    Ok(())
}
