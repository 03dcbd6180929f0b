//! Resource services and the facade that bundles them.

pub mod club;
pub mod event;

use std::fmt;
use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::auth::{AuthService, Sha1Hasher};
use crate::config::Settings;
use crate::db::{constraint_column, PgClubStore, PgEventStore, StoreError};
use crate::validation::ValidationError;

pub use club::ClubService;
pub use event::EventService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Club,
    Event,
}

impl Resource {
    pub fn table(self) -> &'static str {
        match self {
            Resource::Club => "clubs",
            Resource::Event => "events",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Club => "club",
            Resource::Event => "event",
        })
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0} already exists")]
    AlreadyExists(Resource),
    #[error("{0} not found")]
    NotFound(Resource),
    #[error("{0} storage failure")]
    Internal(Resource, #[source] StoreError),
}

impl ServiceError {
    /// Reclassify a storage failure for `resource`.
    pub fn from_store(resource: Resource, err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound(resource),
            StoreError::UniqueViolation { constraint } => {
                log::debug!(
                    "{resource}: unique violation on {}",
                    constraint_column(resource.table(), &constraint).unwrap_or(constraint.as_str())
                );
                ServiceError::AlreadyExists(resource)
            }
            other => ServiceError::Internal(resource, other),
        }
    }
}

/// Everything the HTTP layer calls into.
pub struct Services {
    pub auth: AuthService,
    pub clubs: ClubService,
    pub events: EventService,
}

impl Services {
    pub fn new(auth: AuthService, clubs: ClubService, events: EventService) -> Self {
        Self {
            auth,
            clubs,
            events,
        }
    }

    /// Wire every service to Postgres using `settings`.
    pub fn postgres(db: PgPool, settings: &Settings) -> Self {
        let hasher = Arc::new(Sha1Hasher::new(settings.hash_salt.clone()));
        Self::new(
            AuthService::new(hasher, settings.admin.clone(), &settings.jwt),
            ClubService::new(Arc::new(PgClubStore::new(db.clone()))),
            EventService::new(Arc::new(PgEventStore::new(db))),
        )
    }
}
