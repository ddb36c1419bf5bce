use std::collections::BTreeSet;

use crate::templates::sync::read::Current;
use crate::templates::sync::want::Wanted;

/// What needs to change to make DB == TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistDiff {
    /// Role names to insert.
    pub roles_insert: BTreeSet<String>,
    /// Template tasks to insert: (name, role), in catalogue order.
    pub tasks_insert: Vec<(String, String)>,
    /// Existing template tasks whose role changes: (name, new role).
    pub tasks_reassign: Vec<(String, String)>,
    /// Attribute stubs to insert: (task name, attr name).
    pub attrs_insert: BTreeSet<(String, String)>,
    /// Template tasks to delete (prune only).
    pub tasks_delete: BTreeSet<String>,
    /// Attributes of surviving tasks to delete (prune only).
    pub attrs_delete: BTreeSet<(String, String)>,
}

pub fn make_diff(want: &Wanted, cur: &Current, prune: bool) -> ChecklistDiff {
    let mut diff = ChecklistDiff::default();

    for role in &want.roles {
        if !cur.roles.contains_key(role) {
            diff.roles_insert.insert(role.clone());
        }
    }

    // role_id -> name, for comparing current assignments by name
    let role_names: std::collections::BTreeMap<i64, &String> =
        cur.roles.iter().map(|(name, id)| (*id, name)).collect();

    for (name, role) in &want.tasks {
        match cur.tasks.get(name) {
            None => diff.tasks_insert.push((name.clone(), role.clone())),
            Some((_, role_id)) => {
                let current_role = role_names.get(role_id).map(|s| s.as_str());
                if current_role != Some(role.as_str()) {
                    diff.tasks_reassign.push((name.clone(), role.clone()));
                }
            }
        }
    }

    for pair in &want.attrs {
        if !cur.attrs.contains(pair) {
            diff.attrs_insert.insert(pair.clone());
        }
    }

    if prune {
        for name in cur.tasks.keys() {
            if !want.tasks.contains_key(name) {
                diff.tasks_delete.insert(name.clone());
            }
        }
        for pair in &cur.attrs {
            // attrs of deleted tasks go with the task (FK cascade)
            if !want.attrs.contains(pair) && !diff.tasks_delete.contains(&pair.0) {
                diff.attrs_delete.insert(pair.clone());
            }
        }
    }

    diff
}
