//! Partial-update merging.
//!
//! A sparse update becomes the list of column assignments to persist. A zero
//! value (empty string, `0`, `0.0`) means "not provided", so a field can
//! never be cleared through an update. That rule lives only in the
//! [`SparseUpdate`] impls below.

use crate::models::{ClubUpdate, EventUpdate};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Float(f64),
    Int(i32),
}

/// One `column = value` assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub column: &'static str,
    pub value: Value,
}

pub trait SparseUpdate {
    /// Assignments for every provided field, in declaration order.
    fn changes(&self) -> Vec<Change>;
}

#[derive(Default)]
struct Changes(Vec<Change>);

impl Changes {
    fn text(mut self, column: &'static str, value: &str) -> Self {
        if !value.is_empty() {
            self.0.push(Change {
                column,
                value: Value::Text(value.to_owned()),
            });
        }
        self
    }

    fn float(mut self, column: &'static str, value: f64) -> Self {
        if value != 0.0 {
            self.0.push(Change {
                column,
                value: Value::Float(value),
            });
        }
        self
    }

    fn int(mut self, column: &'static str, value: i32) -> Self {
        if value != 0 {
            self.0.push(Change {
                column,
                value: Value::Int(value),
            });
        }
        self
    }
}

impl SparseUpdate for ClubUpdate {
    fn changes(&self) -> Vec<Change> {
        Changes::default()
            .text("name", &self.name)
            .text("description", &self.description)
            .text("contacts", &self.contact)
            .float("price", self.price)
            .int("spots_number", self.spots_number)
            .text("is_active", &self.is_active)
            .0
    }
}

impl SparseUpdate for EventUpdate {
    fn changes(&self) -> Vec<Change> {
        Changes::default()
            .text("name", &self.name)
            .text("date", &self.date)
            .text("description", &self.description)
            .float("price", self.price)
            .0
    }
}
