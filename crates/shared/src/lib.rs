//! Shared types, errors, and configuration for Prorata.
//!
//! This crate provides common pieces used across all other crates:
//! - Calendar month keys
//! - Application-wide error types
//! - Configuration management
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::{AppConfig, LoggingConfig, ProrationConfig};
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
