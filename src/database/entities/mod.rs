pub mod actors;
pub mod movie_actors;
pub mod movies;
