use diesel::prelude::*;

use leasing_engine::templates::config::load_catalog_str;
use leasing_engine::templates::sync::{SyncOptions, sync_checklist};

mod common;

const SMALL_CHECKLIST: &str = r#"
    [[tasks]]
    name = "Credit Scoring"
    role = "credit_analyst"
    attributes = ["auto_scoring_note"]

    [[tasks]]
    name = "Survei Lapangan"
    role = "surveyor"
    attributes = ["survey_note"]

    [[tasks]]
    name = "Delivery Unit"
    role = "admin_dealer"
"#;

fn template_names(conn: &mut SqliteConnection) -> Vec<String> {
    use leasing_engine::schema::template_tasks::dsl as tt;
    tt::template_tasks
        .order(tt::template_id.asc())
        .select(tt::template_name)
        .load(conn)
        .expect("templates")
}

#[test]
fn sync_inserts_in_catalogue_order() {
    let (_db, mut conn) = common::setup_db();

    let cat = load_catalog_str(SMALL_CHECKLIST).unwrap();
    let diff = sync_checklist(
        &mut conn,
        cat,
        SyncOptions {
            dry_run: false,
            prune: false,
        },
    )
    .unwrap();

    assert_eq!(diff.tasks_insert.len(), 3);
    assert_eq!(
        template_names(&mut conn),
        vec!["Credit Scoring", "Survei Lapangan", "Delivery Unit"]
    );
    assert_eq!(common::count(&mut conn, "roles"), 3);
    assert_eq!(common::count(&mut conn, "template_task_attributes"), 2);
    common::fk_check_empty(&mut conn);
}

#[test]
fn sync_is_idempotent() {
    let (_db, mut conn) = common::setup_db();

    for _ in 0..2 {
        let cat = load_catalog_str(SMALL_CHECKLIST).unwrap();
        sync_checklist(
            &mut conn,
            cat,
            SyncOptions {
                dry_run: false,
                prune: false,
            },
        )
        .unwrap();
    }

    assert_eq!(common::count(&mut conn, "template_tasks"), 3);
    assert_eq!(common::count(&mut conn, "template_task_attributes"), 2);
    assert_eq!(common::count(&mut conn, "roles"), 3);

    // third run reports nothing to do
    let cat = load_catalog_str(SMALL_CHECKLIST).unwrap();
    let diff = sync_checklist(
        &mut conn,
        cat,
        SyncOptions {
            dry_run: true,
            prune: true,
        },
    )
    .unwrap();
    assert!(diff.tasks_insert.is_empty());
    assert!(diff.tasks_reassign.is_empty());
    assert!(diff.attrs_insert.is_empty());
    assert!(diff.tasks_delete.is_empty());
    assert!(diff.attrs_delete.is_empty());
}

#[test]
fn sync_prune_removes_dropped_tasks_and_attrs() {
    let (_db, mut conn) = common::setup_db();

    let cat = load_catalog_str(SMALL_CHECKLIST).unwrap();
    sync_checklist(
        &mut conn,
        cat,
        SyncOptions {
            dry_run: false,
            prune: false,
        },
    )
    .unwrap();

    // drop the survey step, and the scoring attribute
    let trimmed = r#"
        [[tasks]]
        name = "Credit Scoring"
        role = "credit_analyst"

        [[tasks]]
        name = "Delivery Unit"
        role = "admin_dealer"
    "#;
    let cat = load_catalog_str(trimmed).unwrap();
    sync_checklist(
        &mut conn,
        cat,
        SyncOptions {
            dry_run: false,
            prune: true,
        },
    )
    .unwrap();

    assert_eq!(
        template_names(&mut conn),
        vec!["Credit Scoring", "Delivery Unit"]
    );
    assert_eq!(common::count(&mut conn, "template_task_attributes"), 0);
    // roles stay; existing contract tasks may still reference them
    assert_eq!(common::count(&mut conn, "roles"), 3);
    common::fk_check_empty(&mut conn);
}

#[test]
fn sync_dry_run_writes_nothing() {
    let (_db, mut conn) = common::setup_db();

    let cat = load_catalog_str(SMALL_CHECKLIST).unwrap();
    let diff = sync_checklist(
        &mut conn,
        cat,
        SyncOptions {
            dry_run: true,
            prune: false,
        },
    )
    .unwrap();

    assert_eq!(diff.tasks_insert.len(), 3);
    assert_eq!(common::count(&mut conn, "template_tasks"), 0);
    assert_eq!(common::count(&mut conn, "roles"), 0);
}

#[test]
fn sync_reassigns_roles_on_change() {
    let (_db, mut conn) = common::setup_db();

    let cat = load_catalog_str(SMALL_CHECKLIST).unwrap();
    sync_checklist(
        &mut conn,
        cat,
        SyncOptions {
            dry_run: false,
            prune: false,
        },
    )
    .unwrap();

    let reassigned = r#"
        [[tasks]]
        name = "Credit Scoring"
        role = "branch_manager"
        attributes = ["auto_scoring_note"]

        [[tasks]]
        name = "Survei Lapangan"
        role = "surveyor"
        attributes = ["survey_note"]

        [[tasks]]
        name = "Delivery Unit"
        role = "admin_dealer"
    "#;
    let cat = load_catalog_str(reassigned).unwrap();
    let diff = sync_checklist(
        &mut conn,
        cat,
        SyncOptions {
            dry_run: false,
            prune: false,
        },
    )
    .unwrap();
    assert_eq!(diff.tasks_reassign.len(), 1);

    use leasing_engine::schema::roles::dsl as r;
    use leasing_engine::schema::template_tasks::dsl as tt;
    let (_, role_id): (String, i64) = tt::template_tasks
        .filter(tt::template_name.eq("Credit Scoring"))
        .select((tt::template_name, tt::role_id))
        .first(&mut conn)
        .unwrap();
    let role_name: String = r::roles
        .find(role_id)
        .select(r::role_name)
        .first(&mut conn)
        .unwrap();
    assert_eq!(role_name, "branch_manager");
}
