//! Payload validation.
//!
//! Fields are checked in declaration order and the first violation is the
//! only one reported.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{ClubUpdate, EventUpdate, NewClub, NewEvent};

/// Wire format of event dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

static TWO_DECIMALS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("price pattern"));

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("validation error with {field}: {constraint}")]
pub struct ValidationError {
    pub field: &'static str,
    pub constraint: &'static str,
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn fail(field: &'static str, constraint: &'static str) -> Result<(), ValidationError> {
    Err(ValidationError { field, constraint })
}

pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return fail(field, "required");
    }
    Ok(())
}

/// Magnitude from which a shortest float rendering switches to exponent
/// notation, which the price pattern never matches.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Non-negative with at most two fractional digits, judged on the value's
/// display rendering (`10`, `9.9`, `9.99` pass; `9.999`, `-1`, `1e21` do not).
pub fn two_decimal_places(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.abs() >= EXPONENT_THRESHOLD || !TWO_DECIMALS.is_match(&value.to_string()) {
        return fail(field, "twoDecimalPlaces");
    }
    Ok(())
}

pub fn at_least_one(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value < 1 {
        return fail(field, "min");
    }
    Ok(())
}

/// Exactly `YYYY-MM-DD HH:MM`, zero-padded. chrono alone also takes
/// unpadded fields, signed years and runs of spaces, so the parsed value
/// must render back to the input.
pub fn datetime(field: &'static str, value: &str) -> Result<(), ValidationError> {
    match NaiveDateTime::parse_from_str(value, DATE_FORMAT) {
        Ok(parsed) if parsed.format(DATE_FORMAT).to_string() == value => Ok(()),
        _ => fail(field, "datetime"),
    }
}

impl Validate for NewClub {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        two_decimal_places("price", self.price)?;
        at_least_one("spots_number", self.spots_number)
    }
}

impl Validate for ClubUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.price != 0.0 {
            two_decimal_places("price", self.price)?;
        }
        if self.spots_number != 0 {
            at_least_one("spots_number", self.spots_number)?;
        }
        Ok(())
    }
}

impl Validate for NewEvent {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("date", &self.date)?;
        datetime("date", &self.date)?;
        two_decimal_places("price", self.price)
    }
}

impl Validate for EventUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.date.is_empty() {
            datetime("date", &self.date)?;
        }
        if self.price != 0.0 {
            two_decimal_places("price", self.price)?;
        }
        Ok(())
    }
}
