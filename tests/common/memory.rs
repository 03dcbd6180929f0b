//! In-process store with the same contract as the Postgres tables, including
//! the unique constraint on `name`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use theater_server::db::{ClubStore, EventStore, StoreError};
use theater_server::merge::{Change, Value};
use theater_server::models::{Club, Event, NewClub, NewEvent};

/// A row the memory store can hold.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> i32;
    fn name(&self) -> &str;
    fn set(&mut self, change: &Change);
}

impl Record for Club {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set(&mut self, change: &Change) {
        match (change.column, &change.value) {
            ("name", Value::Text(v)) => self.name = v.clone(),
            ("description", Value::Text(v)) => self.description = v.clone(),
            ("contacts", Value::Text(v)) => self.contact = v.clone(),
            ("price", Value::Float(v)) => self.price = *v,
            ("spots_number", Value::Int(v)) => self.spots_number = *v,
            ("is_active", Value::Text(v)) => self.is_active = v.clone(),
            _ => panic!("clubs has no column {:?}", change),
        }
    }
}

impl Record for Event {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set(&mut self, change: &Change) {
        match (change.column, &change.value) {
            ("name", Value::Text(v)) => self.name = v.clone(),
            ("date", Value::Text(v)) => self.date = v.clone(),
            ("description", Value::Text(v)) => self.description = v.clone(),
            ("price", Value::Float(v)) => self.price = *v,
            _ => panic!("events has no column {:?}", change),
        }
    }
}

struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

pub struct MemoryStore<T> {
    table: &'static str,
    inner: Mutex<Table<T>>,
    writes: AtomicUsize,
}

impl<T: Record> MemoryStore<T> {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            inner: Mutex::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of statements that reached the table (insert, update, delete).
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Table<T>> {
        self.inner.lock().unwrap()
    }

    fn duplicate(&self) -> StoreError {
        StoreError::UniqueViolation {
            constraint: format!("{}_name_key", self.table),
        }
    }

    fn insert_with(&self, name: &str, build: impl FnOnce(i32) -> T) -> Result<i32, StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut table = self.lock();
        if table.rows.values().any(|r| r.name() == name) {
            return Err(self.duplicate());
        }
        let id = table.next_id;
        table.next_id += 1;
        table.rows.insert(id, build(id));
        Ok(id)
    }

    fn all_rows(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    fn row(&self, id: i32) -> Result<T, StoreError> {
        self.lock().rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn apply_changes(&self, id: i32, changes: &[Change]) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if changes.is_empty() {
            return Ok(());
        }
        let mut table = self.lock();

        let mut updated = table.rows.get(&id).cloned().ok_or(StoreError::NotFound)?;
        for change in changes {
            updated.set(change);
        }
        if table
            .rows
            .values()
            .any(|r| r.id() != id && r.name() == updated.name())
        {
            return Err(self.duplicate());
        }
        table.rows.insert(id, updated);
        Ok(())
    }

    fn remove_row(&self, id: i32) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.lock()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl ClubStore for MemoryStore<Club> {
    async fn insert(&self, club: &NewClub) -> Result<i32, StoreError> {
        self.insert_with(&club.name, |id| Club::from_new(id, club))
    }

    async fn all(&self) -> Result<Vec<Club>, StoreError> {
        self.all_rows()
    }

    async fn by_id(&self, id: i32) -> Result<Club, StoreError> {
        self.row(id)
    }

    async fn apply(&self, id: i32, changes: &[Change]) -> Result<(), StoreError> {
        self.apply_changes(id, changes)
    }

    async fn remove(&self, id: i32) -> Result<(), StoreError> {
        self.remove_row(id)
    }
}

#[async_trait]
impl EventStore for MemoryStore<Event> {
    async fn insert(&self, event: &NewEvent) -> Result<i32, StoreError> {
        self.insert_with(&event.name, |id| Event::from_new(id, event))
    }

    async fn all(&self) -> Result<Vec<Event>, StoreError> {
        self.all_rows()
    }

    async fn by_id(&self, id: i32) -> Result<Event, StoreError> {
        self.row(id)
    }

    async fn apply(&self, id: i32, changes: &[Change]) -> Result<(), StoreError> {
        self.apply_changes(id, changes)
    }

    async fn remove(&self, id: i32) -> Result<(), StoreError> {
        self.remove_row(id)
    }
}
