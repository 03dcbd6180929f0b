pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod merge;
pub mod metrics;
pub mod models;
pub mod services;
pub mod validation;
