//! Catalog service tests
//!
//! Tests for actor/movie persistence, cast resolution and listing filters

use std::collections::BTreeSet;

use anyhow::Result;
use cinegraph::database::entities::{movie_actors, movies};
use cinegraph::database::setup_database;
use cinegraph::services::{
    ActorQuery, ActorRef, ActorResolution, ActorService, MovieDraft, MovieQuery, MovieService,
    MovieWriteOutcome,
};
use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use tempfile::NamedTempFile;

struct Catalog {
    db: DatabaseConnection,
    actors: ActorService,
    movies: MovieService,
    _temp_file: NamedTempFile,
}

async fn setup_catalog() -> Result<Catalog> {
    let temp_file = NamedTempFile::new()?;
    let db_url = format!("sqlite://{}?mode=rwc", temp_file.path().display());

    let db = Database::connect(&db_url).await?;
    setup_database(&db).await?;

    Ok(Catalog {
        actors: ActorService::new(db.clone()),
        movies: MovieService::new(db.clone()),
        db,
        _temp_file: temp_file,
    })
}

fn draft(title: &str, year: i32, actors: &[i32]) -> MovieDraft {
    MovieDraft {
        title: title.to_string(),
        year,
        actors: actors.iter().map(|id| ActorRef::Key(*id)).collect(),
    }
}

async fn cast_ids(catalog: &Catalog, movie_id: i32) -> Result<BTreeSet<i32>> {
    let cast = catalog.movies.actors_for_movie(movie_id).await?;
    Ok(cast.into_iter().map(|actor| actor.id).collect())
}

#[tokio::test]
async fn test_create_actor_persists_name() -> Result<()> {
    let catalog = setup_catalog().await?;

    for name in ["Keanu Reeves", "", "Zoë Kravitz"] {
        let actor = catalog.actors.create_actor(name.to_string()).await?;
        assert_eq!(actor.name, name);

        let stored = catalog.actors.get_actor(actor.id).await?;
        assert_eq!(stored.map(|a| a.name), Some(name.to_string()));
    }

    Ok(())
}

#[tokio::test]
async fn test_update_actor() -> Result<()> {
    let catalog = setup_catalog().await?;
    let actor = catalog.actors.create_actor("Keanu".to_string()).await?;

    let updated = catalog
        .actors
        .update_actor(actor.id, "Keanu Reeves".to_string())
        .await?
        .expect("actor should exist");
    assert_eq!(updated.id, actor.id);
    assert_eq!(updated.name, "Keanu Reeves");

    Ok(())
}

#[tokio::test]
async fn test_update_missing_actor_leaves_store_unchanged() -> Result<()> {
    let catalog = setup_catalog().await?;
    let actor = catalog.actors.create_actor("Al Pacino".to_string()).await?;

    let result = catalog
        .actors
        .update_actor(actor.id + 100, "Nobody".to_string())
        .await?;
    assert!(result.is_none());

    let all = catalog.actors.list_actors(&ActorQuery::default(), 0, None).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Al Pacino");

    Ok(())
}

#[tokio::test]
async fn test_create_movie_round_trip() -> Result<()> {
    let catalog = setup_catalog().await?;
    let actor = catalog.actors.create_actor("Keanu Reeves".to_string()).await?;

    let movie = catalog
        .movies
        .create_movie(draft("X", 1999, &[actor.id]))
        .await?
        .into_movie()
        .expect("movie should be created");

    let stored = catalog
        .movies
        .get_movie(movie.id)
        .await?
        .expect("movie should be stored");
    assert_eq!(stored.title, "X");
    assert_eq!(stored.year, 1999);

    let cast = catalog.movies.actors_for_movie(movie.id).await?;
    assert_eq!(cast, vec![actor]);

    Ok(())
}

#[tokio::test]
async fn test_create_movie_without_actors() -> Result<()> {
    let catalog = setup_catalog().await?;

    let movie = catalog
        .movies
        .create_movie(draft("Koyaanisqatsi", 1982, &[]))
        .await?
        .into_movie()
        .expect("movie should be created");

    assert!(catalog.movies.actors_for_movie(movie.id).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_create_movie_with_unknown_actor_persists_nothing() -> Result<()> {
    let catalog = setup_catalog().await?;
    let actor = catalog.actors.create_actor("Al Pacino".to_string()).await?;

    let outcome = catalog
        .movies
        .create_movie(draft("Heat", 1995, &[actor.id, 999]))
        .await?;

    match outcome {
        MovieWriteOutcome::ActorNotFound(actor_ref) => assert_eq!(actor_ref, ActorRef::Key(999)),
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert_eq!(movies::Entity::find().count(&catalog.db).await?, 0);
    assert_eq!(movie_actors::Entity::find().count(&catalog.db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_create_movie_with_malformed_reference() -> Result<()> {
    let catalog = setup_catalog().await?;

    let outcome = catalog
        .movies
        .create_movie(MovieDraft {
            title: "Heat".to_string(),
            year: 1995,
            actors: vec![ActorRef::parse("not-an-id")],
        })
        .await?;

    assert!(matches!(outcome, MovieWriteOutcome::ActorNotFound(ActorRef::Malformed(_))));
    assert_eq!(movies::Entity::find().count(&catalog.db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_resolution_stops_at_first_missing_actor() -> Result<()> {
    let catalog = setup_catalog().await?;
    let actor = catalog.actors.create_actor("Val Kilmer".to_string()).await?;

    let refs = vec![
        ActorRef::Key(actor.id),
        ActorRef::Key(500),
        ActorRef::Malformed("later".to_string()),
    ];

    match catalog.movies.resolve_actors(&refs).await? {
        ActorResolution::Unresolved(actor_ref) => assert_eq!(actor_ref, ActorRef::Key(500)),
        other => panic!("unexpected resolution: {:?}", other),
    }

    match catalog.movies.resolve_actors(&refs[..1]).await? {
        ActorResolution::Resolved(cast) => assert_eq!(cast, vec![actor]),
        other => panic!("unexpected resolution: {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_update_movie_replaces_cast() -> Result<()> {
    let catalog = setup_catalog().await?;
    let a = catalog.actors.create_actor("A".to_string()).await?;
    let b = catalog.actors.create_actor("B".to_string()).await?;
    let c = catalog.actors.create_actor("C".to_string()).await?;

    let movie = catalog
        .movies
        .create_movie(draft("Before", 2000, &[a.id, b.id]))
        .await?
        .into_movie()
        .expect("movie should be created");
    assert_eq!(cast_ids(&catalog, movie.id).await?, BTreeSet::from([a.id, b.id]));

    let updated = catalog
        .movies
        .update_movie(movie.id, draft("After", 2001, &[c.id]))
        .await?
        .into_movie()
        .expect("movie should be updated");

    assert_eq!(updated.id, movie.id);
    assert_eq!(updated.title, "After");
    assert_eq!(updated.year, 2001);
    assert_eq!(cast_ids(&catalog, movie.id).await?, BTreeSet::from([c.id]));

    Ok(())
}

#[tokio::test]
async fn test_update_movie_clears_cast() -> Result<()> {
    let catalog = setup_catalog().await?;
    let a = catalog.actors.create_actor("A".to_string()).await?;

    let movie = catalog
        .movies
        .create_movie(draft("Solo", 2010, &[a.id]))
        .await?
        .into_movie()
        .expect("movie should be created");

    catalog
        .movies
        .update_movie(movie.id, draft("Solo", 2010, &[]))
        .await?
        .into_movie()
        .expect("movie should be updated");

    assert!(cast_ids(&catalog, movie.id).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_duplicate_references_collapse() -> Result<()> {
    let catalog = setup_catalog().await?;
    let a = catalog.actors.create_actor("A".to_string()).await?;

    let movie = catalog
        .movies
        .create_movie(draft("Echo", 2004, &[a.id, a.id]))
        .await?
        .into_movie()
        .expect("movie should be created");

    assert_eq!(cast_ids(&catalog, movie.id).await?, BTreeSet::from([a.id]));
    assert_eq!(movie_actors::Entity::find().count(&catalog.db).await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_update_missing_movie_regardless_of_actors() -> Result<()> {
    let catalog = setup_catalog().await?;
    let a = catalog.actors.create_actor("A".to_string()).await?;

    let valid = catalog
        .movies
        .update_movie(42, draft("Ghost", 1990, &[a.id]))
        .await?;
    assert!(matches!(valid, MovieWriteOutcome::MovieNotFound(42)));

    let invalid = catalog
        .movies
        .update_movie(42, draft("Ghost", 1990, &[777]))
        .await?;
    assert!(matches!(invalid, MovieWriteOutcome::MovieNotFound(42)));

    assert_eq!(movies::Entity::find().count(&catalog.db).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_failed_update_keeps_previous_state() -> Result<()> {
    let catalog = setup_catalog().await?;
    let a = catalog.actors.create_actor("A".to_string()).await?;

    let movie = catalog
        .movies
        .create_movie(draft("Original", 1980, &[a.id]))
        .await?
        .into_movie()
        .expect("movie should be created");

    let outcome = catalog
        .movies
        .update_movie(movie.id, draft("Changed", 1981, &[a.id, 404]))
        .await?;
    assert!(matches!(outcome, MovieWriteOutcome::ActorNotFound(ActorRef::Key(404))));

    let stored = catalog
        .movies
        .get_movie(movie.id)
        .await?
        .expect("movie should still exist");
    assert_eq!(stored.title, "Original");
    assert_eq!(stored.year, 1980);
    assert_eq!(cast_ids(&catalog, movie.id).await?, BTreeSet::from([a.id]));

    Ok(())
}

#[tokio::test]
async fn test_filmography() -> Result<()> {
    let catalog = setup_catalog().await?;
    let keanu = catalog.actors.create_actor("Keanu Reeves".to_string()).await?;
    let carrie = catalog.actors.create_actor("Carrie-Anne Moss".to_string()).await?;

    catalog
        .movies
        .create_movie(draft("The Matrix", 1999, &[keanu.id, carrie.id]))
        .await?;
    catalog
        .movies
        .create_movie(draft("John Wick", 2014, &[keanu.id]))
        .await?;

    let titles: Vec<_> = catalog
        .actors
        .movies_for_actor(keanu.id)
        .await?
        .into_iter()
        .map(|movie| movie.title)
        .collect();
    assert_eq!(titles, vec!["The Matrix", "John Wick"]);

    assert_eq!(catalog.actors.movies_for_actor(carrie.id).await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_actor_filters() -> Result<()> {
    let catalog = setup_catalog().await?;
    for name in ["Keanu Reeves", "Kevin Bacon", "Al Pacino", "50%_Man"] {
        catalog.actors.create_actor(name.to_string()).await?;
    }

    let exact = catalog
        .actors
        .list_actors(
            &ActorQuery {
                name: Some("Kevin Bacon".to_string()),
                ..Default::default()
            },
            0,
            None,
        )
        .await?;
    assert_eq!(exact.len(), 1);

    let prefix = ActorQuery {
        name_starts_with: Some("ke".to_string()),
        ..Default::default()
    };
    let names: Vec<_> = catalog
        .actors
        .list_actors(&prefix, 0, None)
        .await?
        .into_iter()
        .map(|actor| actor.name)
        .collect();
    assert_eq!(names, vec!["Keanu Reeves", "Kevin Bacon"]);
    assert_eq!(catalog.actors.count_actors(&prefix).await?, 2);

    // Wildcards in the prefix are matched literally
    let literal = ActorQuery {
        name_starts_with: Some("50%_".to_string()),
        ..Default::default()
    };
    assert_eq!(catalog.actors.count_actors(&literal).await?, 1);
    let wildcard = ActorQuery {
        name_starts_with: Some("%".to_string()),
        ..Default::default()
    };
    assert_eq!(catalog.actors.count_actors(&wildcard).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_movie_filters_and_paging() -> Result<()> {
    let catalog = setup_catalog().await?;
    for (title, year) in [
        ("The Matrix", 1999),
        ("The Matrix Reloaded", 2003),
        ("Heat", 1995),
        ("Fight Club", 1999),
    ] {
        catalog.movies.create_movie(draft(title, year, &[])).await?;
    }

    let by_year = MovieQuery {
        year: Some(1999),
        ..Default::default()
    };
    assert_eq!(catalog.movies.count_movies(&by_year).await?, 2);

    let contains = MovieQuery {
        title_contains: Some("MATRIX".to_string()),
        ..Default::default()
    };
    assert_eq!(catalog.movies.count_movies(&contains).await?, 2);

    let combined = MovieQuery {
        title_starts_with: Some("the".to_string()),
        year: Some(2003),
        ..Default::default()
    };
    let found = catalog.movies.list_movies(&combined, 0, None).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "The Matrix Reloaded");

    let exact = MovieQuery {
        title: Some("heat".to_string()),
        ..Default::default()
    };
    assert_eq!(catalog.movies.count_movies(&exact).await?, 0);

    let page: Vec<_> = catalog
        .movies
        .list_movies(&MovieQuery::default(), 1, Some(2))
        .await?
        .into_iter()
        .map(|movie| movie.title)
        .collect();
    assert_eq!(page, vec!["The Matrix Reloaded", "Heat"]);

    Ok(())
}

#[tokio::test]
async fn test_unbounded_listing_after_offset() -> Result<()> {
    let catalog = setup_catalog().await?;
    for name in ["A", "B", "C"] {
        catalog.actors.create_actor(name.to_string()).await?;
    }

    let everyone = catalog.actors.list_actors(&ActorQuery::default(), 0, None).await?;
    assert_eq!(everyone.len(), 3);

    let rest: Vec<_> = catalog
        .actors
        .list_actors(&ActorQuery::default(), 1, None)
        .await?
        .into_iter()
        .map(|actor| actor.name)
        .collect();
    assert_eq!(rest, vec!["B", "C"]);

    for title in ["One", "Two"] {
        catalog.movies.create_movie(draft(title, 2000, &[])).await?;
    }
    let tail = catalog.movies.list_movies(&MovieQuery::default(), 1, None).await?;
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].title, "Two");

    Ok(())
}

#[tokio::test]
async fn test_filters_with_non_ascii_letters() -> Result<()> {
    let catalog = setup_catalog().await?;
    catalog.actors.create_actor("Émile Zola".to_string()).await?;
    catalog.movies.create_movie(draft("Le Fabuleux Destin d'Amélie Poulain", 2001, &[])).await?;

    let same_case = ActorQuery {
        name_starts_with: Some("Émile".to_string()),
        ..Default::default()
    };
    assert_eq!(catalog.actors.count_actors(&same_case).await?, 1);

    // ASCII letters still fold around the accented one
    let shouted = ActorQuery {
        name_starts_with: Some("ÉMILE z".to_string()),
        ..Default::default()
    };
    assert_eq!(catalog.actors.count_actors(&shouted).await?, 1);

    let contains = MovieQuery {
        title_contains: Some("AMéLIE".to_string()),
        ..Default::default()
    };
    assert_eq!(catalog.movies.count_movies(&contains).await?, 1);

    let prefix = MovieQuery {
        title_starts_with: Some("le fabuleux".to_string()),
        ..Default::default()
    };
    assert_eq!(catalog.movies.count_movies(&prefix).await?, 1);

    Ok(())
}
