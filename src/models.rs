//! Club and event records plus the payloads that create and update them.
//!
//! Payload fields all default to their zero value when absent from the JSON
//! body; the validation and merge layers give those zeros their meaning.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[sqlx(rename = "contacts")]
    pub contact: String,
    pub price: f64,
    pub spots_number: i32,
    pub is_active: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewClub {
    pub name: String,
    pub description: String,
    pub contact: String,
    pub price: f64,
    pub spots_number: i32,
    pub is_active: String,
}

/// Sparse club update: zero-valued fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubUpdate {
    pub name: String,
    pub description: String,
    pub contact: String,
    pub price: f64,
    pub spots_number: i32,
    pub is_active: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub date: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEvent {
    pub name: String,
    /// `YYYY-MM-DD HH:MM`
    pub date: String,
    pub description: String,
    pub price: f64,
}

/// Sparse event update: zero-valued fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventUpdate {
    pub name: String,
    pub date: String,
    pub description: String,
    pub price: f64,
}

impl Club {
    pub fn from_new(id: i32, new: &NewClub) -> Self {
        Club {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            contact: new.contact.clone(),
            price: new.price,
            spots_number: new.spots_number,
            is_active: new.is_active.clone(),
        }
    }
}

impl Event {
    pub fn from_new(id: i32, new: &NewEvent) -> Self {
        Event {
            id,
            name: new.name.clone(),
            date: new.date.clone(),
            description: new.description.clone(),
            price: new.price,
        }
    }
}

/// Body returned by the create endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct Created {
    pub id: i32,
}
