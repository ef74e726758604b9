//! Plumbing shared by the goals and analytics services.
//!
//! Each service binary loads a [`config::ServiceConfig`], installs logging,
//! opens one MongoDB handle and wraps its router with [`http::standard_layers`],
//! which also serves Prometheus metrics from [`telemetry`].

pub mod config;
pub mod http;
pub mod logging;
pub mod mongo;
pub mod request_id;
pub mod store;
pub mod telemetry;

pub use config::{ConfigError, ServiceConfig, ServiceDefaults};
pub use store::StoreError;
