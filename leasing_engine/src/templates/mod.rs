//! Checklist template catalogue.
//!
//! This module groups configuration and synchronization utilities for the
//! master checklist: the ordered template tasks every new contract receives a
//! copy of at submission, each with a responsible role and declared note
//! attributes. See [`crate::templates::config`] for the TOML model and
//! helpers, and [`crate::templates::sync`] for the desired-state sync into
//! the template tables.

pub mod config;
pub mod sync;
