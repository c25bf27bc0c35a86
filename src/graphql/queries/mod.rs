use async_graphql::connection::{query, Connection, Edge};
use async_graphql::*;

use crate::global_id::{self, NodeKind};
use crate::graphql::context::GraphQLContext;
use crate::graphql::errors::catalog_error_to_graphql_error;
use crate::graphql::types::{Actor, ActorFilter, Movie, MovieFilter, Node, PageWindow};
use crate::services::{ActorQuery, MovieQuery};

#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
    /// Get a specific actor by ID
    async fn actor(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Actor>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let context = ctx.data::<GraphQLContext>()?;
        let actor = context
            .actor_service()
            .get_actor(id)
            .await
            .map_err(catalog_error_to_graphql_error)?;

        Ok(actor.map(Actor::from))
    }

    /// Get a specific movie by ID
    async fn movie(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Movie>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let context = ctx.data::<GraphQLContext>()?;
        let movie = context
            .movie_service()
            .get_movie(id)
            .await
            .map_err(catalog_error_to_graphql_error)?;

        Ok(movie.map(Movie::from))
    }

    /// List actors, optionally filtered by name
    async fn actors(
        &self,
        ctx: &Context<'_>,
        filter: Option<ActorFilter>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<Connection<usize, Actor>> {
        let context = ctx.data::<GraphQLContext>()?;
        let service = context.actor_service();
        let filter = ActorQuery::from(filter.unwrap_or_default());

        query(
            after,
            before,
            first,
            last,
            |after: Option<usize>, before: Option<usize>, first, last| async move {
                let total = service
                    .count_actors(&filter)
                    .await
                    .map_err(catalog_error_to_graphql_error)?;
                let window = PageWindow::resolve(total as usize, after, before, first, last);

                let mut connection =
                    Connection::new(window.has_previous_page(), window.has_next_page());
                if window.is_empty() {
                    return Ok::<_, Error>(connection);
                }

                let actors = service
                    .list_actors(&filter, window.offset(), Some(window.limit()))
                    .await
                    .map_err(catalog_error_to_graphql_error)?;

                connection.edges.extend(
                    actors
                        .into_iter()
                        .enumerate()
                        .map(|(i, actor)| Edge::new(window.start + i, Actor::from(actor))),
                );
                Ok(connection)
            },
        )
        .await
    }

    /// List movies, optionally filtered by title and year
    async fn movies(
        &self,
        ctx: &Context<'_>,
        filter: Option<MovieFilter>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<Connection<usize, Movie>> {
        let context = ctx.data::<GraphQLContext>()?;
        let service = context.movie_service();
        let filter = MovieQuery::from(filter.unwrap_or_default());

        query(
            after,
            before,
            first,
            last,
            |after: Option<usize>, before: Option<usize>, first, last| async move {
                let total = service
                    .count_movies(&filter)
                    .await
                    .map_err(catalog_error_to_graphql_error)?;
                let window = PageWindow::resolve(total as usize, after, before, first, last);

                let mut connection =
                    Connection::new(window.has_previous_page(), window.has_next_page());
                if window.is_empty() {
                    return Ok::<_, Error>(connection);
                }

                let movies = service
                    .list_movies(&filter, window.offset(), Some(window.limit()))
                    .await
                    .map_err(catalog_error_to_graphql_error)?;

                connection.edges.extend(
                    movies
                        .into_iter()
                        .enumerate()
                        .map(|(i, movie)| Edge::new(window.start + i, Movie::from(movie))),
                );
                Ok(connection)
            },
        )
        .await
    }

    /// Fetch any object by its relay global id
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let Some((kind, key)) = global_id::decode(id.as_str()) else {
            return Ok(None);
        };

        let context = ctx.data::<GraphQLContext>()?;
        let node = match kind {
            NodeKind::Actor => context
                .actor_service()
                .get_actor(key)
                .await
                .map_err(catalog_error_to_graphql_error)?
                .map(|actor| Node::Actor(Actor::from(actor))),
            NodeKind::Movie => context
                .movie_service()
                .get_movie(key)
                .await
                .map_err(catalog_error_to_graphql_error)?
                .map(|movie| Node::Movie(Movie::from(movie))),
        };

        Ok(node)
    }
}
