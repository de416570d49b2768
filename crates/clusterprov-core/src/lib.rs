//! Core types and configuration for clusterprov.
//!
//! This crate defines the `clusterprov.toml` schema ([`ClusterprovConfig`])
//! and the shared error type.

pub mod config;
pub mod error;

pub use config::{
    ClusterConfig, ClusterprovConfig, CredentialsConfig, ProjectConfig, WaitConfig, CONFIG_FILE,
};
pub use error::{Error, Result};
