use anyhow::{anyhow, Result};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::services::{
    ActorQuery, ActorRef, ActorService, MovieDraft, MovieQuery, MovieService, MovieWriteOutcome,
};

const EXAMPLE_CAST: &[&str] = &[
    "Keanu Reeves",
    "Carrie-Anne Moss",
    "Laurence Fishburne",
    "Al Pacino",
    "Robert De Niro",
];

const EXAMPLE_MOVIES: &[(&str, i32, &[usize])] = &[
    ("The Matrix", 1999, &[0, 1, 2]),
    ("The Matrix Reloaded", 2003, &[0, 1, 2]),
    ("Heat", 1995, &[3, 4]),
];

/// Populate an empty catalog with a handful of movies. Does nothing when
/// movies already exist.
pub async fn create_example_catalog(db: &DatabaseConnection) -> Result<()> {
    let actor_service = ActorService::new(db.clone());
    let movie_service = MovieService::new(db.clone());

    if movie_service.count_movies(&MovieQuery::default()).await? > 0 {
        info!("Catalog already has movies, skipping seed data creation");
        return Ok(());
    }

    info!("Creating example catalog");

    let mut actor_ids = Vec::with_capacity(EXAMPLE_CAST.len());
    for name in EXAMPLE_CAST {
        let existing = actor_service
            .list_actors(
                &ActorQuery {
                    name: Some(name.to_string()),
                    name_starts_with: None,
                },
                0,
                Some(1),
            )
            .await?;

        let actor = match existing.into_iter().next() {
            Some(actor) => actor,
            None => actor_service.create_actor(name.to_string()).await?,
        };
        actor_ids.push(actor.id);
    }

    for (title, year, cast) in EXAMPLE_MOVIES {
        let draft = MovieDraft {
            title: title.to_string(),
            year: *year,
            actors: cast.iter().map(|i| ActorRef::Key(actor_ids[*i])).collect(),
        };

        match movie_service.create_movie(draft).await? {
            MovieWriteOutcome::Saved(movie) => {
                info!("Created example movie {} ({})", movie.title, movie.year)
            }
            other => return Err(anyhow!("Failed to seed {}: {:?}", title, other)),
        }
    }

    Ok(())
}
