use indexmap::IndexMap;
use std::collections::BTreeSet;

use crate::templates::config::ChecklistCatalog;

/// Desired state derived from the normalized TOML catalogue.
///
/// Task order is the catalogue order (IndexMap preserves insertion order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wanted {
    pub roles: BTreeSet<String>,
    pub tasks: IndexMap<String, String>, // name -> role
    pub attrs: BTreeSet<(String, String)>, // (task name, attr name)
}

pub fn wanted_from_catalog(cat: &ChecklistCatalog) -> Wanted {
    let mut roles = BTreeSet::new();
    let mut tasks = IndexMap::new();
    let mut attrs = BTreeSet::new();

    for task in &cat.tasks {
        roles.insert(task.role.clone());
        tasks.insert(task.name.clone(), task.role.clone());
        for attr in &task.attributes {
            attrs.insert((task.name.clone(), attr.clone()));
        }
    }

    Wanted {
        roles,
        tasks,
        attrs,
    }
}
