//! Infrastructure Layer
//!
//! Contains external concerns: the hardcoded registry data and configuration.

pub mod driven_adapters;
