use async_trait::async_trait;
use sqlx::PgPool;

use super::{delete_row, update_row, EventStore, StoreError};
use crate::merge::Change;
use crate::models::{Event, NewEvent};

const COLUMNS: &str = "id, name, date, description, price";

/// `events` table access.
#[derive(Clone)]
pub struct PgEventStore {
    db: PgPool,
}

impl PgEventStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn insert(&self, event: &NewEvent) -> Result<i32, StoreError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"INSERT INTO events (name, date, description, price)
               VALUES ($1, $2, $3, $4)
               RETURNING id"#,
        )
        .bind(&event.name)
        .bind(&event.date)
        .bind(&event.description)
        .bind(event.price)
        .fetch_one(&self.db)
        .await?;

        Ok(id)
    }

    async fn all(&self) -> Result<Vec<Event>, StoreError> {
        let rows = sqlx::query_as::<_, Event>(&format!("SELECT {COLUMNS} FROM events ORDER BY id"))
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn by_id(&self, id: i32) -> Result<Event, StoreError> {
        let event =
            sqlx::query_as::<_, Event>(&format!("SELECT {COLUMNS} FROM events WHERE id = $1"))
                .bind(id)
                .fetch_one(&self.db)
                .await?;
        Ok(event)
    }

    async fn apply(&self, id: i32, changes: &[Change]) -> Result<(), StoreError> {
        update_row(&self.db, "events", id, changes).await
    }

    async fn remove(&self, id: i32) -> Result<(), StoreError> {
        delete_row(&self.db, "events", id).await
    }
}
