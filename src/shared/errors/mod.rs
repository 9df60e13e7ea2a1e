//! Error Types
//!
//! Lookups and membership tests never fail. These errors only arise when
//! parsing input, building a custom registry, or setting up logging.

use thiserror::Error;

use crate::domain::models::network::ChainId;

/// Domain-level errors for malformed values
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid chain ID {0}")]
    InvalidChainId(String),
}

/// Errors raised while building a fixed registry from entries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Network with chain_id {0} is declared more than once")]
    DuplicateChainId(ChainId),

    #[error("Network with chain_id {0} has an empty name")]
    EmptyName(ChainId),

    #[error("Development chain names must not be empty")]
    EmptyDevelopmentName,
}

/// Use case-level errors for callers that treat absence as a failure
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },
}

/// Errors raised while installing the tracing subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Global tracing subscriber already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}
