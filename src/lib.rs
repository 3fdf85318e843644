//! Customer record management service.
//!
//! The [`domain::customer::CustomerService`] validates candidate payloads,
//! coordinates a [`domain::customer::CustomerRepository`] and reports every
//! outcome as a [`domain::customer::ResponseEnvelope`]. The `http` module
//! exposes it over actix-web; `persistence` provides in-memory and Postgres
//! repositories.

pub mod config;
pub mod domain;
pub mod http;
pub mod metrics;
pub mod persistence;
pub mod utils;

pub use config::{AppConfig, StorageKind};
pub use domain::customer::{CustomerService, ResponseEnvelope, RestCustomer};
