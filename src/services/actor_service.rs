use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use crate::database::entities::{actors, movie_actors, movies};
use crate::errors::CatalogResult;
use crate::services::filters::{paginate, ActorQuery};

#[derive(Clone)]
pub struct ActorService {
    db: DatabaseConnection,
}

impl ActorService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get an actor by primary key
    pub async fn get_actor(&self, id: i32) -> CatalogResult<Option<actors::Model>> {
        let actor = actors::Entity::find_by_id(id).one(&self.db).await?;
        Ok(actor)
    }

    /// List actors matching `query`, ordered by id
    pub async fn list_actors(
        &self,
        query: &ActorQuery,
        offset: u64,
        limit: Option<u64>,
    ) -> CatalogResult<Vec<actors::Model>> {
        let select = actors::Entity::find()
            .filter(query.condition())
            .order_by_asc(actors::Column::Id);

        Ok(paginate(select, offset, limit).all(&self.db).await?)
    }

    pub async fn count_actors(&self, query: &ActorQuery) -> CatalogResult<u64> {
        let total = actors::Entity::find()
            .filter(query.condition())
            .count(&self.db)
            .await?;
        Ok(total)
    }

    /// Movies the actor is credited in
    pub async fn movies_for_actor(&self, actor_id: i32) -> CatalogResult<Vec<movies::Model>> {
        let movies = movies::Entity::find()
            .inner_join(movie_actors::Entity)
            .filter(movie_actors::Column::ActorId.eq(actor_id))
            .order_by_asc(movies::Column::Id)
            .all(&self.db)
            .await?;
        Ok(movies)
    }

    /// Create a new actor
    pub async fn create_actor(&self, name: String) -> CatalogResult<actors::Model> {
        let actor = actors::ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let actor = actor.insert(&self.db).await?;
        debug!(actor_id = actor.id, "Created actor");
        Ok(actor)
    }

    /// Rename an existing actor. `None` when the id does not resolve.
    pub async fn update_actor(&self, id: i32, name: String) -> CatalogResult<Option<actors::Model>> {
        let Some(actor) = actors::Entity::find_by_id(id).one(&self.db).await? else {
            debug!(actor_id = id, "Actor not found for update");
            return Ok(None);
        };

        let mut actor: actors::ActiveModel = actor.into();
        actor.name = Set(name);

        let actor = actor.update(&self.db).await?;
        debug!(actor_id = actor.id, "Updated actor");
        Ok(Some(actor))
    }
}
