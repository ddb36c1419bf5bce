use anyhow::Context;
use diesel::prelude::*;
use std::collections::BTreeMap;

use crate::models::master::{NewRole, NewTemplateTask, NewTemplateTaskAttribute};
use crate::templates::sync::diff::ChecklistDiff;

/// Apply the diff inside the current transaction.
/// Note: delete order honors FKs: attributes -> tasks; roles are kept.
pub fn apply_diff(conn: &mut SqliteConnection, diff: &ChecklistDiff) -> anyhow::Result<()> {
    use crate::schema::{roles, template_task_attributes as tta, template_tasks as tt};

    // Roles first; tasks reference them.
    for role in &diff.roles_insert {
        diesel::insert_into(roles::table)
            .values(&NewRole { role_name: role })
            .on_conflict(roles::role_name)
            .do_nothing()
            .execute(conn)?;
    }

    let role_ids: BTreeMap<String, i64> = roles::table
        .select((roles::role_name, roles::role_id))
        .load::<(String, i64)>(conn)?
        .into_iter()
        .collect();
    let role_id = |name: &str| -> anyhow::Result<i64> {
        role_ids
            .get(name)
            .copied()
            .with_context(|| format!("role not found after insert: {name}"))
    };

    // Catalogue order; ascending template_id stays the checklist order.
    for (name, role) in &diff.tasks_insert {
        diesel::insert_into(tt::table)
            .values(&NewTemplateTask {
                template_name: name,
                role_id: role_id(role)?,
            })
            .execute(conn)?;
    }

    for (name, role) in &diff.tasks_reassign {
        diesel::update(tt::table.filter(tt::template_name.eq(name)))
            .set(tt::role_id.eq(role_id(role)?))
            .execute(conn)?;
    }

    let task_ids: BTreeMap<String, i64> = tt::table
        .select((tt::template_name, tt::template_id))
        .load::<(String, i64)>(conn)?
        .into_iter()
        .collect();

    for (task, attr) in &diff.attrs_insert {
        let template_id = task_ids
            .get(task)
            .copied()
            .with_context(|| format!("template task not found after insert: {task}"))?;
        diesel::insert_into(tta::table)
            .values(&NewTemplateTaskAttribute {
                attr_name: attr,
                template_id,
            })
            .on_conflict((tta::template_id, tta::attr_name))
            .do_nothing()
            .execute(conn)?;
    }

    // Prune (attributes of surviving tasks, then whole tasks)
    for (task, attr) in &diff.attrs_delete {
        if let Some(template_id) = task_ids.get(task).copied() {
            diesel::delete(
                tta::table.filter(tta::template_id.eq(template_id).and(tta::attr_name.eq(attr))),
            )
            .execute(conn)?;
        }
    }

    for name in &diff.tasks_delete {
        diesel::delete(tt::table.filter(tt::template_name.eq(name))).execute(conn)?;
    }

    Ok(())
}
