//! Shared helpers for the leasing binaries: application configuration and
//! environment-variable lookups.

pub mod config;
pub mod env;
