use std::sync::Arc;

use super::{Resource, ServiceError};
use crate::db::{ClubStore, StoreError};
use crate::merge::SparseUpdate;
use crate::models::{Club, ClubUpdate, NewClub};
use crate::validation::Validate;

fn classify(err: StoreError) -> ServiceError {
    ServiceError::from_store(Resource::Club, err)
}

pub struct ClubService {
    store: Arc<dyn ClubStore>,
}

impl ClubService {
    pub fn new(store: Arc<dyn ClubStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, club: &NewClub) -> Result<i32, ServiceError> {
        club.validate()?;
        self.store.insert(club).await.map_err(classify)
    }

    pub async fn list(&self) -> Result<Vec<Club>, ServiceError> {
        self.store.all().await.map_err(classify)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Club, ServiceError> {
        self.store.by_id(id).await.map_err(classify)
    }

    /// Persist the provided fields of `update`; nothing provided is a no-op.
    pub async fn update(&self, id: i32, update: &ClubUpdate) -> Result<(), ServiceError> {
        update.validate()?;
        let changes = update.changes();
        if changes.is_empty() {
            log::debug!("club {id}: empty update, nothing to write");
            return Ok(());
        }
        self.store.apply(id, &changes).await.map_err(classify)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.store.remove(id).await.map_err(classify)
    }
}
