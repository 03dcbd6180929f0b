use async_trait::async_trait;
use sqlx::PgPool;

use super::{delete_row, update_row, ClubStore, StoreError};
use crate::merge::Change;
use crate::models::{Club, NewClub};

const COLUMNS: &str = "id, name, description, contacts, price, spots_number, is_active";

/// `clubs` table access.
#[derive(Clone)]
pub struct PgClubStore {
    db: PgPool,
}

impl PgClubStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClubStore for PgClubStore {
    async fn insert(&self, club: &NewClub) -> Result<i32, StoreError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"INSERT INTO clubs (name, description, contacts, price, spots_number, is_active)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id"#,
        )
        .bind(&club.name)
        .bind(&club.description)
        .bind(&club.contact)
        .bind(club.price)
        .bind(club.spots_number)
        .bind(&club.is_active)
        .fetch_one(&self.db)
        .await?;

        Ok(id)
    }

    async fn all(&self) -> Result<Vec<Club>, StoreError> {
        let rows = sqlx::query_as::<_, Club>(&format!("SELECT {COLUMNS} FROM clubs ORDER BY id"))
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn by_id(&self, id: i32) -> Result<Club, StoreError> {
        let club = sqlx::query_as::<_, Club>(&format!("SELECT {COLUMNS} FROM clubs WHERE id = $1"))
            .bind(id)
            .fetch_one(&self.db)
            .await?;
        Ok(club)
    }

    async fn apply(&self, id: i32, changes: &[Change]) -> Result<(), StoreError> {
        update_row(&self.db, "clubs", id, changes).await
    }

    async fn remove(&self, id: i32) -> Result<(), StoreError> {
        delete_row(&self.db, "clubs", id).await
    }
}
