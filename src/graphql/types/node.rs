use async_graphql::*;

use crate::graphql::types::{Actor, Movie};

/// Relay object identification
#[derive(Interface, Clone, Debug)]
#[graphql(field(name = "id", ty = "&ID"))]
pub enum Node {
    Actor(Actor),
    Movie(Movie),
}
