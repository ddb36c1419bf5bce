#![allow(dead_code)]

use diesel::prelude::*;
use diesel::sql_query;
use std::path::PathBuf;
use tempfile::TempDir;

use leasing_engine::db::{connection, migrate};
use leasing_engine::models::LeasingContract;
use leasing_engine::templates::config::load_catalog_str;
use leasing_engine::templates::sync::{SyncOptions, sync_checklist};
use leasing_engine::workflow::input::SubmitApplicationInput;
use leasing_engine::workflow::submit_application;

pub struct TestDb {
    _dir: TempDir,    // keep alive for the life of the test
    pub path: String, // <tmpdir>/test.db
}

pub fn setup_db() -> (TestDb, SqliteConnection) {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("test.db");
    let path = p.to_string_lossy().to_string();

    // run migrations via the public API
    migrate::run_all(&path).expect("migrations");

    // open a connection with PRAGMAs applied
    let conn = connection::connect_sqlite(&path).expect("connect");
    (TestDb { _dir: dir, path }, conn)
}

/// Ids of the master rows every workflow test needs.
pub struct Seeded {
    pub customer_id: i64,
    pub motor_id: i64,
    pub product_id: i64,
}

/// Seed one customer, one ready motor (OTR 20M), and one product
/// (tenor 12, DP 20-40%, 10% flat).
pub fn seed_master(conn: &mut SqliteConnection) -> Seeded {
    use leasing_engine::schema::{customers, leasing_product, motors};

    diesel::insert_into(customers::table)
        .values((
            customers::nik.eq("3173051201900001"),
            customers::nama_lengkap.eq("Budi Santoso"),
            customers::no_hp.eq("081234567890"),
            customers::email.eq("budi@example.id"),
            customers::pekerjaan.eq("karyawan"),
            customers::salary.eq(9_500_000.0),
        ))
        .execute(conn)
        .expect("seed customer");

    diesel::insert_into(motors::table)
        .values((
            motors::merk.eq("Honda"),
            motors::tahun.eq(2024i16),
            motors::warna.eq("hitam"),
            motors::nomor_rangka.eq("MH1KC5110RK000001"),
            motors::status_unit.eq("ready"),
            motors::harga_otr.eq(20_000_000.0),
        ))
        .execute(conn)
        .expect("seed motor");

    diesel::insert_into(leasing_product::table)
        .values((
            leasing_product::kode_produk.eq("REG12"),
            leasing_product::nama_produk.eq("Reguler 12 Bulan"),
            leasing_product::tenor_bulan.eq(12i16),
            leasing_product::dp_persen_min.eq(20.0),
            leasing_product::dp_persen_max.eq(40.0),
            leasing_product::bunga_flat.eq(10.0),
            leasing_product::admin_fee.eq(250_000.0),
            leasing_product::asuransi.eq(true),
        ))
        .execute(conn)
        .expect("seed product");

    Seeded {
        customer_id: 1,
        motor_id: 1,
        product_id: 1,
    }
}

/// The standard nine-step checklist used by the workflow tests, synced
/// through the catalogue machinery (which also seeds the roles).
pub const CHECKLIST_TOML: &str = r#"
    [[tasks]]
    name = "Credit Scoring"
    role = "credit_analyst"
    attributes = ["auto_scoring_note"]

    [[tasks]]
    name = "Manual Review"
    role = "credit_analyst"
    attributes = ["manual_review_note"]

    [[tasks]]
    name = "Pre-Approval"
    role = "credit_analyst"

    [[tasks]]
    name = "Survei Lapangan"
    role = "surveyor"
    attributes = ["survey_note"]

    [[tasks]]
    name = "Final Approval"
    role = "branch_manager"
    attributes = ["final_approval_note"]

    [[tasks]]
    name = "Akad Kredit"
    role = "admin_kredit"

    [[tasks]]
    name = "Pembayaran DP"
    role = "kasir"

    [[tasks]]
    name = "PO Unit ke Dealer"
    role = "admin_dealer"
    attributes = ["unit_stock_note"]

    [[tasks]]
    name = "Delivery Unit"
    role = "admin_dealer"
    attributes = ["delivery_date"]
"#;

pub fn seed_checklist(conn: &mut SqliteConnection) {
    let cat = load_catalog_str(CHECKLIST_TOML).expect("parse checklist");
    sync_checklist(
        conn,
        cat,
        SyncOptions {
            dry_run: false,
            prune: false,
        },
    )
    .expect("sync checklist");
}

/// Submit the canonical application: seeded ids, DP 5M, product tenor.
pub fn submit_default(conn: &mut SqliteConnection, seeded: &Seeded) -> LeasingContract {
    submit_application(
        conn,
        &SubmitApplicationInput {
            customer_id: seeded.customer_id,
            motor_id: seeded.motor_id,
            product_id: seeded.product_id,
            dp_dibayar: 5_000_000.0,
            ..Default::default()
        },
    )
    .expect("submit application")
}

pub fn contract_status(conn: &mut SqliteConnection, id: i64) -> String {
    use leasing_engine::schema::leasing_contract::dsl as lc;
    lc::leasing_contract
        .find(id)
        .select(lc::status)
        .first(conn)
        .expect("contract status")
}

pub fn motor_status(conn: &mut SqliteConnection, id: i64) -> String {
    use leasing_engine::schema::motors::dsl as m;
    m::motors
        .find(id)
        .select(m::status_unit)
        .first(conn)
        .expect("motor status")
}

/// (status, actual_start_date, actual_end_date) of the named task.
pub fn task_state(
    conn: &mut SqliteConnection,
    contract_id: i64,
    name: &str,
) -> (String, Option<String>, Option<String>) {
    use leasing_engine::schema::leasing_tasks::dsl as lt;
    lt::leasing_tasks
        .filter(lt::contract_id.eq(contract_id).and(lt::task_name.eq(name)))
        .select((lt::status, lt::actual_start_date, lt::actual_end_date))
        .first(conn)
        .expect("task row")
}

/// All (attr_name, attr_value, status) rows of the named task.
pub fn task_attrs(
    conn: &mut SqliteConnection,
    contract_id: i64,
    name: &str,
) -> Vec<(String, String, String)> {
    use leasing_engine::schema::leasing_task_attributes::dsl as lta;
    use leasing_engine::schema::leasing_tasks::dsl as lt;

    let task_id: i64 = lt::leasing_tasks
        .filter(lt::contract_id.eq(contract_id).and(lt::task_name.eq(name)))
        .select(lt::task_id)
        .first(conn)
        .expect("task row");

    lta::leasing_task_attributes
        .filter(lta::task_id.eq(task_id))
        .order(lta::attr_id.asc())
        .select((lta::attr_name, lta::attr_value, lta::status))
        .load(conn)
        .expect("attr rows")
}

pub fn count(conn: &mut SqliteConnection, table: &str) -> i64 {
    #[derive(diesel::QueryableByName)]
    struct C {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        c: i64,
    }
    let q = format!("SELECT COUNT(*) AS c FROM {table}");
    sql_query(q).get_result::<C>(conn).unwrap().c
}

pub fn fk_check_empty(conn: &mut SqliteConnection) {
    // PRAGMA foreign_key_check returns rows if there are violations.
    // We assert there are none.
    #[derive(diesel::QueryableByName, Debug)]
    struct Row {
        #[diesel(sql_type = diesel::sql_types::Text)]
        table: String,
    }
    let rows: Vec<Row> = sql_query("PRAGMA foreign_key_check;")
        .load(conn)
        .expect("fk_check");

    assert!(rows.is_empty(), "foreign key check not empty: {rows:?}");
}
