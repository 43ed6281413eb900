//! Configuration module
//!
//! Service settings loaded from an optional TOML file with environment
//! overrides for deployment.

pub mod config;
