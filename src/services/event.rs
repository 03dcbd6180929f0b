use std::sync::Arc;

use super::{Resource, ServiceError};
use crate::db::{EventStore, StoreError};
use crate::merge::SparseUpdate;
use crate::models::{Event, EventUpdate, NewEvent};
use crate::validation::Validate;

fn classify(err: StoreError) -> ServiceError {
    ServiceError::from_store(Resource::Event, err)
}

pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, event: &NewEvent) -> Result<i32, ServiceError> {
        event.validate()?;
        self.store.insert(event).await.map_err(classify)
    }

    pub async fn list(&self) -> Result<Vec<Event>, ServiceError> {
        self.store.all().await.map_err(classify)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Event, ServiceError> {
        self.store.by_id(id).await.map_err(classify)
    }

    pub async fn update(&self, id: i32, update: &EventUpdate) -> Result<(), ServiceError> {
        update.validate()?;
        let changes = update.changes();
        if changes.is_empty() {
            log::debug!("event {id}: empty update, nothing to write");
            return Ok(());
        }
        self.store.apply(id, &changes).await.map_err(classify)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.store.remove(id).await.map_err(classify)
    }
}
