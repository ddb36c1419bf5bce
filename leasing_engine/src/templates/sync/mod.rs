//! Checklist catalogue synchronization (roles, template tasks, attributes).
//!
//! ## What this does
//! - Parses a [`ChecklistCatalog`] (TOML) and **normalizes** it (trimmed
//!   names, lowercase roles, dedupe).
//! - Computes a **diff** between TOML (desired) and the DB (current).
//! - Applies the diff with idempotent inserts/updates and optional **prune**
//!   deletes.
//!
//! ## Transactions & consistency
//! Everything runs inside a single **`BEGIN IMMEDIATE`** transaction via
//! `SqliteConnection::immediate_transaction`, so a sync either lands whole or
//! not at all — a concurrent `SubmitApplication` bootstrapping a contract
//! never sees half a catalogue.
//!
//! ## Ordering
//! New template tasks are inserted in catalogue order, so ascending
//! `template_id` keeps matching the checklist order the bootstrap relies on.
//!
//! ## Dry-run
//! When `SyncOptions::dry_run` is `true`, the structured [`ChecklistDiff`] is
//! returned and nothing is written.
//!
//! ## Delete order (prune)
//! Attributes of surviving tasks are deleted explicitly; deleting a task
//! removes its remaining attributes via `ON DELETE CASCADE`. Roles are never
//! pruned — existing contract tasks may still reference them.

mod apply;
mod diff;
mod read;
mod want;

use diesel::SqliteConnection;

pub use diff::ChecklistDiff;

use crate::templates::config::{ChecklistCatalog, normalize_catalog};
use crate::templates::sync::apply::apply_diff;
use crate::templates::sync::diff::make_diff;
use crate::templates::sync::read::read_current;
use crate::templates::sync::want::wanted_from_catalog;

/// Options for checklist synchronization.
pub struct SyncOptions {
    /// If true, compute the diff only and print/log what would change.
    pub dry_run: bool,
    /// If true, delete template rows not present in the TOML.
    pub prune: bool,
}

/// Sync the checklist template catalogue into the database.
pub fn sync_checklist(
    conn: &mut SqliteConnection,
    mut cat: ChecklistCatalog,
    opt: SyncOptions,
) -> anyhow::Result<ChecklistDiff> {
    let _ = normalize_catalog(&mut cat)?;

    let want = wanted_from_catalog(&cat);
    let cur = read_current(conn)?;
    let diff = make_diff(&want, &cur, opt.prune);

    if opt.dry_run {
        return Ok(diff);
    }

    // one-shot transactional apply, BEGIN IMMEDIATE
    conn.immediate_transaction::<_, anyhow::Error, _>(|tx| apply_diff(tx, &diff))?;

    tracing::info!(
        tasks_inserted = diff.tasks_insert.len(),
        tasks_deleted = diff.tasks_delete.len(),
        "checklist catalogue synced"
    );
    Ok(diff)
}
