use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_actors::Entity")]
    MovieActors,
}

impl Related<super::movie_actors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieActors.def()
    }
}

// Cast membership lives in `movie_actors`
impl Related<super::actors::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_actors::Relation::Actors.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_actors::Relation::Movies.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
