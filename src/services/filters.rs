use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QuerySelect, Select};

use crate::database::entities::{actors, movies};

/// Criteria for listing actors. Empty criteria match every actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActorQuery {
    pub name: Option<String>,
    pub name_starts_with: Option<String>,
}

impl ActorQuery {
    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = &self.name {
            condition = condition.add(actors::Column::Name.eq(name.as_str()));
        }

        if let Some(prefix) = &self.name_starts_with {
            condition = condition.add(ilike(actors::Column::Name, format!("{}%", escape_like(prefix))));
        }

        condition
    }
}

/// Criteria for listing movies. Empty criteria match every movie.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieQuery {
    pub title: Option<String>,
    pub title_starts_with: Option<String>,
    pub title_contains: Option<String>,
    pub year: Option<i32>,
}

impl MovieQuery {
    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(title) = &self.title {
            condition = condition.add(movies::Column::Title.eq(title.as_str()));
        }

        if let Some(prefix) = &self.title_starts_with {
            condition = condition.add(ilike(movies::Column::Title, format!("{}%", escape_like(prefix))));
        }

        if let Some(fragment) = &self.title_contains {
            condition =
                condition.add(ilike(movies::Column::Title, format!("%{}%", escape_like(fragment))));
        }

        if let Some(year) = self.year {
            condition = condition.add(movies::Column::Year.eq(year));
        }

        condition
    }
}

const LIKE_ESCAPE: char = '!';

/// Apply an offset window. SQLite rejects `OFFSET` without `LIMIT`, so an
/// open-ended window past the first row gets an unbounded limit.
pub fn paginate<E>(select: Select<E>, offset: u64, limit: Option<u64>) -> Select<E>
where
    E: EntityTrait,
{
    match limit {
        Some(limit) => select.offset(offset).limit(limit),
        None if offset > 0 => select.offset(offset).limit(i64::MAX as u64),
        None => select,
    }
}

/// Case-insensitive LIKE. SQLite's `LOWER` folds ASCII only, so the pattern
/// is folded the same way and non-ASCII letters compare exactly.
fn ilike<C>(column: C, pattern: String) -> SimpleExpr
where
    C: ColumnTrait,
{
    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(pattern.to_ascii_lowercase()).escape(LIKE_ESCAPE))
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, LIKE_ESCAPE | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}
