//! Shared Module
//!
//! Cross-cutting utilities and types used across the crate.

pub mod errors;
pub mod telemetry;

pub use errors::{DomainError, RegistryError, TelemetryError, UseCaseError};
