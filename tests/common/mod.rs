//! Shared fixtures: services wired to in-memory stores.
#![allow(dead_code)]

pub mod memory;

use std::sync::Arc;

use theater_server::auth::{hash, AdminCredentials, AuthService, Sha1Hasher};
use theater_server::config::JwtSettings;
use theater_server::models::{Club, Event, NewClub, NewEvent};
use theater_server::services::{ClubService, EventService, Services};

use memory::MemoryStore;

pub const SIGN_KEY: &str = "test-sign-key";
pub const SALT: &str = "pepper";
pub const ADMIN: &str = "admin";
pub const PASSWORD: &str = "s3cret";

pub fn jwt(ttl: i64) -> JwtSettings {
    JwtSettings {
        sign_key: SIGN_KEY.into(),
        token_ttl: ttl,
    }
}

pub fn auth_service() -> AuthService {
    AuthService::new(
        Arc::new(Sha1Hasher::new(SALT)),
        AdminCredentials {
            username: ADMIN.into(),
            password_hash: hash(PASSWORD, SALT),
        },
        &jwt(3_600),
    )
}

pub struct Fixture {
    pub services: Services,
    pub clubs: Arc<MemoryStore<Club>>,
    pub events: Arc<MemoryStore<Event>>,
}

pub fn fixture() -> Fixture {
    let clubs = Arc::new(MemoryStore::<Club>::new("clubs"));
    let events = Arc::new(MemoryStore::<Event>::new("events"));
    let services = Services::new(
        auth_service(),
        ClubService::new(clubs.clone()),
        EventService::new(events.clone()),
    );
    Fixture {
        services,
        clubs,
        events,
    }
}

pub fn club(name: &str) -> NewClub {
    NewClub {
        name: name.into(),
        description: "improv on thursdays".into(),
        contact: "+1 555 0100".into(),
        price: 12.5,
        spots_number: 20,
        is_active: "true".into(),
    }
}

pub fn event(name: &str) -> NewEvent {
    NewEvent {
        name: name.into(),
        date: "2024-05-17 19:30".into(),
        description: "premiere".into(),
        price: 30.0,
    }
}
