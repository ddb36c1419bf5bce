//! Envelope and status-code checks for the workflow endpoints.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use diesel::prelude::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use leasing_api::{AppState, router};
use leasing_engine::db::{connection, migrate};
use leasing_engine::templates::config::load_catalog_str;
use leasing_engine::templates::sync::{SyncOptions, sync_checklist};

const CHECKLIST_TOML: &str = r#"
    [[tasks]]
    name = "Credit Scoring"
    role = "credit_analyst"
    attributes = ["auto_scoring_note"]

    [[tasks]]
    name = "Pre-Approval"
    role = "credit_analyst"

    [[tasks]]
    name = "Survei Lapangan"
    role = "surveyor"
    attributes = ["survey_note"]

    [[tasks]]
    name = "Pembayaran DP"
    role = "kasir"

    [[tasks]]
    name = "Delivery Unit"
    role = "admin_dealer"
    attributes = ["delivery_date"]
"#;

fn setup() -> (TempDir, Router) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("api.db").to_string_lossy().to_string();
    migrate::run_all(&path).expect("migrations");

    let mut conn = connection::connect_sqlite(&path).expect("connect");
    seed(&mut conn);

    let app = router(AppState::new(path.as_str()));
    (dir, app)
}

fn seed(conn: &mut SqliteConnection) {
    use leasing_engine::schema::{customers, leasing_product, motors};

    diesel::insert_into(customers::table)
        .values((
            customers::nik.eq("3173051201900002"),
            customers::nama_lengkap.eq("Siti Rahma"),
            customers::no_hp.eq("081298765432"),
            customers::email.eq("siti@example.id"),
            customers::pekerjaan.eq("wiraswasta"),
            customers::salary.eq(12_000_000.0),
        ))
        .execute(conn)
        .expect("seed customer");

    diesel::insert_into(motors::table)
        .values((
            motors::merk.eq("Honda"),
            motors::tahun.eq(2024i16),
            motors::warna.eq("merah"),
            motors::nomor_rangka.eq("MH1KC5110RK000002"),
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

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("request");

    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

fn submit_body() -> Value {
    json!({
        "customer_id": 1,
        "motor_id": 1,
        "product_id": 1,
        "dp_dibayar": 5_000_000.0
    })
}

#[tokio::test]
async fn submit_returns_created_contract_in_envelope() {
    let (_dir, app) = setup();

    let (status, body) = post_json(&app, "/workflow/submit-application", submit_body()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("application submitted"));
    assert_eq!(body["data"]["contract_id"], json!(1));
    assert_eq!(body["data"]["status"], json!("draft"));
    assert_eq!(body["data"]["pokok_pinjaman"], json!(15_000_000.0));
}

#[tokio::test]
async fn domain_errors_map_to_envelope_codes() {
    let (_dir, app) = setup();

    // 5% DP, under the product floor
    let (status, body) = post_json(
        &app,
        "/workflow/submit-application",
        json!({
            "customer_id": 1,
            "motor_id": 1,
            "product_id": 1,
            "dp_dibayar": 1_000_000.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("DP_OUT_OF_RANGE"));

    // missing contract
    let (status, body) = post_json(
        &app,
        "/workflow/akad",
        json!({ "contract_id": 99, "generate_contract_code": true }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn malformed_json_is_invalid_input() {
    let (_dir, app) = setup();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/workflow/auto-scoring")
                .header("content-type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["error"]["code"], json!("INVALID_INPUT"));
}

#[tokio::test]
async fn full_flow_reaches_delivery() {
    let (_dir, app) = setup();

    let (status, _) = post_json(&app, "/workflow/submit-application", submit_body()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(
        &app,
        "/workflow/auto-scoring",
        json!({ "contract_id": 1, "auto_approved": true, "note": "skor bagus" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["contract_id"], json!(1));

    let (status, _) = post_json(
        &app,
        "/workflow/survey",
        json!({ "contract_id": 1, "decision": "approve", "note": "ok" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post_json(
        &app,
        "/workflow/initial-payment",
        json!({
            "contract_id": 1,
            "nomor_bukti": "BKT-API-0001",
            "jumlah_bayar": 5_000_000.0,
            "metode_pembayaran": "transfer",
            "provider": "BCA"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // duplicate proof number -> 409
    let (status, body) = post_json(
        &app,
        "/workflow/initial-payment",
        json!({
            "contract_id": 1,
            "nomor_bukti": "BKT-API-0001",
            "jumlah_bayar": 5_000_000.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], json!("CONFLICT"));

    let (status, _) = post_json(
        &app,
        "/workflow/delivery",
        json!({ "contract_id": 1, "customer_received": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // the workflow is closed now
    let (status, body) = post_json(
        &app,
        "/workflow/survey",
        json!({ "contract_id": 1, "decision": "approve", "note": "late" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("CONTRACT_NOT_APPROVED"));
}
