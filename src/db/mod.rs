//! Persistence: store traits and their Postgres implementations.

pub mod club_repo;
pub mod event_repo;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use thiserror::Error;

use crate::merge::{Change, Value};
use crate::models::{Club, Event, NewClub, NewEvent};

pub use club_repo::PgClubStore;
pub use event_repo::PgEventStore;

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint {constraint:?} violated")]
    UniqueViolation { constraint: String },
    #[error("no matching row")]
    NotFound,
    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(ref db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                StoreError::UniqueViolation {
                    constraint: db.constraint().unwrap_or_default().to_owned(),
                }
            }
            other => StoreError::Database(other),
        }
    }
}

/// Column named by a Postgres default unique-constraint name
/// (`<table>_<column>_key`). `clubs_spots_number_key` gives `spots_number`.
pub fn constraint_column<'a>(table: &str, constraint: &'a str) -> Option<&'a str> {
    constraint
        .strip_prefix(table)?
        .strip_prefix('_')?
        .strip_suffix("_key")
        .filter(|column| !column.is_empty())
}

#[async_trait]
pub trait ClubStore: Send + Sync {
    async fn insert(&self, club: &NewClub) -> Result<i32, StoreError>;
    async fn all(&self) -> Result<Vec<Club>, StoreError>;
    async fn by_id(&self, id: i32) -> Result<Club, StoreError>;
    /// Apply `changes` to one row; `NotFound` when no row has `id`.
    async fn apply(&self, id: i32, changes: &[Change]) -> Result<(), StoreError>;
    async fn remove(&self, id: i32) -> Result<(), StoreError>;
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn insert(&self, event: &NewEvent) -> Result<i32, StoreError>;
    async fn all(&self) -> Result<Vec<Event>, StoreError>;
    async fn by_id(&self, id: i32) -> Result<Event, StoreError>;
    async fn apply(&self, id: i32, changes: &[Change]) -> Result<(), StoreError>;
    async fn remove(&self, id: i32) -> Result<(), StoreError>;
}

/// `UPDATE <table> SET c1 = $1, ... WHERE id = $n`, one bind per change.
pub(crate) fn update_statement<'a>(
    table: &str,
    id: i32,
    changes: &[Change],
) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::<Postgres>::new("UPDATE ");
    qb.push(table).push(" SET ");

    let mut set = qb.separated(", ");
    for change in changes {
        set.push(change.column);
        set.push_unseparated(" = ");
        match &change.value {
            Value::Text(v) => set.push_bind_unseparated(v.clone()),
            Value::Float(v) => set.push_bind_unseparated(*v),
            Value::Int(v) => set.push_bind_unseparated(*v),
        };
    }

    qb.push(" WHERE id = ").push_bind(id);
    qb
}

pub(crate) async fn update_row(
    db: &PgPool,
    table: &str,
    id: i32,
    changes: &[Change],
) -> Result<(), StoreError> {
    if changes.is_empty() {
        return Ok(());
    }

    let rows = update_statement(table, id, changes)
        .build()
        .execute(db)
        .await?
        .rows_affected();
    if rows == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub(crate) async fn delete_row(db: &PgPool, table: &str, id: i32) -> Result<(), StoreError> {
    let rows = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1"))
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    if rows == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::{constraint_column, update_statement, StoreError};
    use crate::merge::SparseUpdate;
    use crate::models::{ClubUpdate, EventUpdate};

    #[derive(Debug, thiserror::Error)]
    #[error("pg error {code}")]
    struct PgError {
        code: &'static str,
        constraint: Option<&'static str>,
    }

    impl DatabaseError for PgError {
        fn message(&self) -> &str {
            "pg error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            match self.code {
                "23505" => ErrorKind::UniqueViolation,
                _ => ErrorKind::Other,
            }
        }
    }

    fn pg(code: &'static str, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(PgError { code, constraint }))
    }

    #[test]
    fn price_only_update_binds_one_column() {
        let update = ClubUpdate {
            price: 7.5,
            ..Default::default()
        };
        let qb = update_statement("clubs", 3, &update.changes());
        assert_eq!(qb.sql(), "UPDATE clubs SET price = $1 WHERE id = $2");
    }

    #[test]
    fn full_update_sets_columns_in_declaration_order() {
        let club = ClubUpdate {
            name: "Drama".into(),
            description: "improv".into(),
            contact: "+1 555 0100".into(),
            price: 12.5,
            spots_number: 20,
            is_active: "true".into(),
        };
        let qb = update_statement("clubs", 1, &club.changes());
        assert_eq!(
            qb.sql(),
            "UPDATE clubs SET name = $1, description = $2, contacts = $3, price = $4, \
             spots_number = $5, is_active = $6 WHERE id = $7"
        );

        let event = EventUpdate {
            date: "2024-05-17 19:30".into(),
            price: 30.0,
            ..Default::default()
        };
        let qb = update_statement("events", 1, &event.changes());
        assert_eq!(qb.sql(), "UPDATE events SET date = $1, price = $2 WHERE id = $3");
    }

    #[test]
    fn unique_violation_is_classified_by_sqlstate() {
        let err = StoreError::from(pg("23505", Some("clubs_name_key")));
        assert!(
            matches!(&err, StoreError::UniqueViolation { constraint } if constraint == "clubs_name_key"),
            "{err:?}"
        );

        let unnamed = StoreError::from(pg("23505", None));
        assert!(
            matches!(&unnamed, StoreError::UniqueViolation { constraint } if constraint.is_empty()),
            "{unnamed:?}"
        );
    }

    #[test]
    fn other_errors_keep_their_meaning() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::NotFound
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Database(sqlx::Error::PoolTimedOut)
        ));
        // foreign_key_violation is not a duplicate
        assert!(matches!(
            StoreError::from(pg("23503", Some("events_club_id_fkey"))),
            StoreError::Database(sqlx::Error::Database(_))
        ));
    }

    #[test]
    fn column_from_default_constraint_name() {
        assert_eq!(constraint_column("clubs", "clubs_name_key"), Some("name"));
        assert_eq!(constraint_column("events", "events_name_key"), Some("name"));
    }

    #[test]
    fn multi_word_column_survives() {
        assert_eq!(
            constraint_column("clubs", "clubs_spots_number_key"),
            Some("spots_number")
        );
    }

    #[test]
    fn foreign_or_malformed_names_give_none() {
        assert_eq!(constraint_column("clubs", "events_name_key"), None);
        assert_eq!(constraint_column("clubs", "clubs_name_idx"), None);
        assert_eq!(constraint_column("clubs", "clubs__key"), None);
        assert_eq!(constraint_column("clubs", ""), None);
    }
}
