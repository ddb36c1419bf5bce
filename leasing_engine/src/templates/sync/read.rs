use diesel::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Current template state read from the database.
pub struct Current {
    pub roles: BTreeMap<String, i64>,          // name -> id
    pub tasks: BTreeMap<String, (i64, i64)>,   // name -> (template_id, role_id)
    pub attrs: BTreeSet<(String, String)>,     // (task name, attr name)
}

pub fn read_current(conn: &mut SqliteConnection) -> anyhow::Result<Current> {
    use crate::schema::{roles, template_task_attributes, template_tasks};

    let roles: BTreeMap<String, i64> = roles::table
        .select((roles::role_name, roles::role_id))
        .load::<(String, i64)>(conn)?
        .into_iter()
        .collect();

    let tasks: BTreeMap<String, (i64, i64)> = template_tasks::table
        .select((
            template_tasks::template_name,
            template_tasks::template_id,
            template_tasks::role_id,
        ))
        .load::<(String, i64, i64)>(conn)?
        .into_iter()
        .map(|(name, id, role_id)| (name, (id, role_id)))
        .collect();

    // attr rows joined back to their task name in memory
    let id_to_name: BTreeMap<i64, String> = tasks
        .iter()
        .map(|(name, (id, _))| (*id, name.clone()))
        .collect();
    let attrs = template_task_attributes::table
        .select((
            template_task_attributes::template_id,
            template_task_attributes::attr_name,
        ))
        .load::<(i64, String)>(conn)?
        .into_iter()
        .filter_map(|(tid, attr)| id_to_name.get(&tid).map(|name| (name.clone(), attr)))
        .collect();

    Ok(Current {
        roles,
        tasks,
        attrs,
    })
}
