//! Checklist bootstrap and task-mutation helpers.
//!
//! Tasks are matched by **case-insensitive substring** on `task_name`
//! (`lower(task_name) LIKE '%keyword%'`). Helpers may match zero, one, or
//! many tasks; zero matches is a no-op, never an error. Note-append targets
//! the lowest-sequence matching task only.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::dates;
use crate::error::WorkflowError;
use crate::models::master::{TemplateTask, TemplateTaskAttribute};
use crate::models::{NewLeasingTask, NewLeasingTaskAttribute};
use crate::workflow::status::{MotorStatus, TaskAttrStatus, TaskStatus};

diesel::define_sql_function! {
    /// SQL `lower()`, used for case-insensitive task-name matching.
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Materialise the checklist for a fresh contract from the template
/// catalogue.
///
/// Templates are read in ascending id order; task `i` (0-based) gets
/// `sequence_no = i + 1`, starts at the request date with a 14-day deadline,
/// and opens `inprogress`. Declared template attributes become empty-valued
/// `pending` stubs. No templates at all leaves the checklist empty.
pub fn bootstrap_tasks_from_template(
    conn: &mut SqliteConnection,
    contract_id: i64,
    request_date: DateTime<Utc>,
) -> Result<(), WorkflowError> {
    use crate::schema::template_task_attributes::dsl as tta;
    use crate::schema::template_tasks::dsl as tt;
    use crate::schema::{leasing_task_attributes, leasing_tasks};

    let templates: Vec<TemplateTask> = tt::template_tasks
        .order(tt::template_id.asc())
        .select(TemplateTask::as_select())
        .load(conn)?;
    if templates.is_empty() {
        return Ok(());
    }

    let attributes: Vec<TemplateTaskAttribute> = tta::template_task_attributes
        .order(tta::attr_id.asc())
        .select(TemplateTaskAttribute::as_select())
        .load(conn)?;

    let start = dates::to_rfc3339_millis(request_date);
    let end = dates::to_rfc3339_millis(dates::add_days(request_date, 14));

    for (idx, tmpl) in templates.iter().enumerate() {
        let task = NewLeasingTask {
            task_name: &tmpl.template_name,
            start_date: &start,
            end_date: &end,
            sequence_no: idx as i32 + 1,
            status: TaskStatus::InProgress.as_str(),
            contract_id,
            role_id: tmpl.role_id,
        };
        let task_id: i64 = diesel::insert_into(leasing_tasks::table)
            .values(&task)
            .returning(leasing_tasks::task_id)
            .get_result(conn)?;

        for attr in attributes
            .iter()
            .filter(|a| a.template_id == tmpl.template_id)
        {
            let stub = NewLeasingTaskAttribute {
                attr_name: &attr.attr_name,
                attr_value: "",
                status: TaskAttrStatus::Pending.as_str(),
                task_id,
            };
            diesel::insert_into(leasing_task_attributes::table)
                .values(&stub)
                .execute(conn)?;
        }
    }

    Ok(())
}

/// Set the status of every task of `contract_id` whose name contains
/// `keyword` (case-insensitive). Returns the number of tasks touched.
///
/// Completion stamps both actual dates with one shared timestamp;
/// cancellation stamps only the actual end date.
pub fn update_task_status_by_keyword(
    conn: &mut SqliteConnection,
    contract_id: i64,
    keyword: &str,
    new_status: TaskStatus,
) -> Result<usize, WorkflowError> {
    use crate::schema::leasing_tasks::dsl as lt;

    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Ok(0);
    }
    let pattern = format!("%{keyword}%");
    let matching = lt::leasing_tasks.filter(
        lt::contract_id
            .eq(contract_id)
            .and(lower(lt::task_name).like(pattern)),
    );

    let now = dates::to_rfc3339_millis(Utc::now());
    let n = match new_status {
        TaskStatus::Completed => diesel::update(matching)
            .set((
                lt::status.eq(new_status.as_str()),
                lt::actual_start_date.eq(Some(now.clone())),
                lt::actual_end_date.eq(Some(now)),
            ))
            .execute(conn)?,
        TaskStatus::Cancelled => diesel::update(matching)
            .set((
                lt::status.eq(new_status.as_str()),
                lt::actual_end_date.eq(Some(now)),
            ))
            .execute(conn)?,
        TaskStatus::InProgress => diesel::update(matching)
            .set(lt::status.eq(new_status.as_str()))
            .execute(conn)?,
    };
    Ok(n)
}

/// Append a note attribute to the lowest-sequence task of `contract_id`
/// matching `keyword`.
///
/// A blank note or a keyword with no matching task is a no-op.
pub fn append_task_note_by_keyword(
    conn: &mut SqliteConnection,
    contract_id: i64,
    keyword: &str,
    attr_name: &str,
    note: &str,
    status: TaskAttrStatus,
) -> Result<(), WorkflowError> {
    use crate::schema::leasing_task_attributes;
    use crate::schema::leasing_tasks::dsl as lt;

    let note = note.trim();
    if note.is_empty() {
        return Ok(());
    }

    let keyword = keyword.trim().to_lowercase();
    let pattern = format!("%{keyword}%");
    let task_id: Option<i64> = lt::leasing_tasks
        .filter(
            lt::contract_id
                .eq(contract_id)
                .and(lower(lt::task_name).like(pattern)),
        )
        .order(lt::sequence_no.asc())
        .select(lt::task_id)
        .first(conn)
        .optional()?;
    let Some(task_id) = task_id else {
        return Ok(());
    };

    let attr = NewLeasingTaskAttribute {
        attr_name: attr_name.trim(),
        attr_value: note,
        status: status.as_str(),
        task_id,
    };
    diesel::insert_into(leasing_task_attributes::table)
        .values(&attr)
        .execute(conn)?;
    Ok(())
}

/// Return a motor unit to the pool, but only if it is still `booked`.
/// A unit already `leased` (or `ready`) is left untouched.
pub fn release_motor_if_booked(
    conn: &mut SqliteConnection,
    motor_id: i64,
) -> Result<(), WorkflowError> {
    use crate::schema::motors::dsl as m;

    diesel::update(
        m::motors.filter(
            m::motor_id
                .eq(motor_id)
                .and(m::status_unit.eq(MotorStatus::Booked.as_str())),
        ),
    )
    .set(m::status_unit.eq(MotorStatus::Ready.as_str()))
    .execute(conn)?;
    Ok(())
}
