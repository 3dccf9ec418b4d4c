//! cs-core - Core library for complyseed
//!
//! This crate provides configuration loading and credential resolution,
//! the Organization/Account domain model, expiry urgency rules, and SQL
//! literal helpers shared by the executor and the migration sequencer.

pub mod config;
pub mod error;
pub mod model;
pub mod sql_utils;
pub mod urgency;

pub use config::{Config, Credentials, Endpoint, FailurePolicy, Settings};
pub use error::{CoreError, CoreResult};
pub use model::{Account, Organization};
pub use urgency::{days_remaining, ExpiryStats, StatusCategory, UrgencyBand};
