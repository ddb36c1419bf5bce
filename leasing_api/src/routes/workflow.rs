//! The eight workflow endpoints.
//!
//! Request DTOs mirror the wire contract; absent fields behave like their
//! zero values, so callers only send what a phase needs.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use leasing_engine::error::WorkflowError;
use leasing_engine::workflow::{self, input};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Workflow route table.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workflow/submit-application", post(submit_application))
        .route("/workflow/auto-scoring", post(process_auto_scoring))
        .route("/workflow/survey", post(process_survey_result))
        .route("/workflow/final-approval", post(process_final_approval))
        .route("/workflow/akad", post(execute_akad))
        .route("/workflow/initial-payment", post(record_initial_payment))
        .route("/workflow/dealer-fulfillment", post(process_dealer_fulfillment))
        .route("/workflow/delivery", post(complete_delivery))
}

/// JSON extractor whose rejection is the standard error envelope.
pub struct AppJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(_) => Err(ApiError::Workflow(WorkflowError::InvalidInput)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContractDocumentRequest {
    file_name: String,
    file_size: f64,
    file_type: String,
    file_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SubmitApplicationRequest {
    customer_id: i64,
    motor_id: i64,
    product_id: i64,
    dp_dibayar: f64,
    tenor_bulan: i16,
    request_date: Option<DateTime<Utc>>,
    documents: Vec<ContractDocumentRequest>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AutoScoringRequest {
    contract_id: i64,
    auto_approved: bool,
    manual_review_ready: bool,
    manual_approved: bool,
    note: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SurveyRequest {
    contract_id: i64,
    decision: String,
    additional_dp: f64,
    note: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FinalApprovalRequest {
    contract_id: i64,
    approved: bool,
    note: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AkadRequest {
    contract_id: i64,
    contract_number: String,
    akad_date: Option<DateTime<Utc>>,
    tanggal_mulai_cicil: Option<DateTime<Utc>>,
    generate_contract_code: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InitialPaymentRequest {
    contract_id: i64,
    nomor_bukti: String,
    jumlah_bayar: f64,
    tanggal_bayar: Option<DateTime<Utc>>,
    metode_pembayaran: String,
    provider: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DealerFulfillmentRequest {
    contract_id: i64,
    unit_ready_stock: bool,
    estimated_indent_week: i32,
    note: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeliveryRequest {
    contract_id: i64,
    delivery_date: Option<DateTime<Utc>>,
    customer_received: bool,
    document_handover: bool,
    handover_note: String,
    tanggal_mulai_cicil: Option<DateTime<Utc>>,
    contract_doc_uploads: Vec<ContractDocumentRequest>,
}

fn map_documents(docs: Vec<ContractDocumentRequest>) -> Vec<input::ContractDocumentInput> {
    docs.into_iter()
        .map(|doc| input::ContractDocumentInput {
            file_name: doc.file_name,
            file_size: doc.file_size,
            file_type: doc.file_type,
            file_url: doc.file_url,
        })
        .collect()
}

async fn submit_application(
    State(state): State<AppState>,
    AppJson(req): AppJson<SubmitApplicationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = input::SubmitApplicationInput {
        customer_id: req.customer_id,
        motor_id: req.motor_id,
        product_id: req.product_id,
        dp_dibayar: req.dp_dibayar,
        tenor_bulan: req.tenor_bulan,
        request_date: req.request_date,
        documents: map_documents(req.documents),
    };
    let contract = state
        .run(move |conn| workflow::submit_application(conn, &input))
        .await?;

    let body = ApiResponse::ok("application submitted", json!(contract));
    Ok((StatusCode::CREATED, Json(body)))
}

async fn process_auto_scoring(
    State(state): State<AppState>,
    AppJson(req): AppJson<AutoScoringRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = input::AutoScoringInput {
        contract_id: req.contract_id,
        auto_approved: req.auto_approved,
        manual_review_ready: req.manual_review_ready,
        manual_approved: req.manual_approved,
        note: req.note,
    };
    state
        .run(move |conn| workflow::process_auto_scoring(conn, &input))
        .await?;

    let body = ApiResponse::ok("auto scoring processed", json!({ "contract_id": req.contract_id }));
    Ok(Json(body))
}

async fn process_survey_result(
    State(state): State<AppState>,
    AppJson(req): AppJson<SurveyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = input::SurveyInput {
        contract_id: req.contract_id,
        decision: req.decision,
        additional_dp: req.additional_dp,
        note: req.note,
    };
    state
        .run(move |conn| workflow::process_survey_result(conn, &input))
        .await?;

    let body = ApiResponse::ok("survey result processed", json!({ "contract_id": req.contract_id }));
    Ok(Json(body))
}

async fn process_final_approval(
    State(state): State<AppState>,
    AppJson(req): AppJson<FinalApprovalRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = input::FinalApprovalInput {
        contract_id: req.contract_id,
        approved: req.approved,
        note: req.note,
    };
    state
        .run(move |conn| workflow::process_final_approval(conn, &input))
        .await?;

    let body = ApiResponse::ok("final approval processed", json!({ "contract_id": req.contract_id }));
    Ok(Json(body))
}

async fn execute_akad(
    State(state): State<AppState>,
    AppJson(req): AppJson<AkadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = input::AkadInput {
        contract_id: req.contract_id,
        contract_number: req.contract_number,
        akad_date: req.akad_date,
        tanggal_mulai_cicil: req.tanggal_mulai_cicil,
        generate_contract_code: req.generate_contract_code,
    };
    state
        .run(move |conn| workflow::execute_akad(conn, &input))
        .await?;

    let body = ApiResponse::ok("akad processed", json!({ "contract_id": req.contract_id }));
    Ok(Json(body))
}

async fn record_initial_payment(
    State(state): State<AppState>,
    AppJson(req): AppJson<InitialPaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = input::InitialPaymentInput {
        contract_id: req.contract_id,
        nomor_bukti: req.nomor_bukti,
        jumlah_bayar: req.jumlah_bayar,
        tanggal_bayar: req.tanggal_bayar,
        metode_pembayaran: req.metode_pembayaran,
        provider: req.provider,
    };
    state
        .run(move |conn| workflow::record_initial_payment(conn, &input))
        .await?;

    let body = ApiResponse::ok("initial payment recorded", json!({ "contract_id": req.contract_id }));
    Ok(Json(body))
}

async fn process_dealer_fulfillment(
    State(state): State<AppState>,
    AppJson(req): AppJson<DealerFulfillmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = input::DealerFulfillmentInput {
        contract_id: req.contract_id,
        unit_ready_stock: req.unit_ready_stock,
        estimated_indent_week: req.estimated_indent_week,
        note: req.note,
    };
    state
        .run(move |conn| workflow::process_dealer_fulfillment(conn, &input))
        .await?;

    let body = ApiResponse::ok(
        "dealer fulfillment processed",
        json!({ "contract_id": req.contract_id }),
    );
    Ok(Json(body))
}

async fn complete_delivery(
    State(state): State<AppState>,
    AppJson(req): AppJson<DeliveryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = input::DeliveryInput {
        contract_id: req.contract_id,
        delivery_date: req.delivery_date,
        customer_received: req.customer_received,
        document_handover: req.document_handover,
        handover_note: req.handover_note,
        tanggal_mulai_cicil: req.tanggal_mulai_cicil,
        contract_documents: map_documents(req.contract_doc_uploads),
    };
    state
        .run(move |conn| workflow::complete_delivery(conn, &input))
        .await?;

    let body = ApiResponse::ok("delivery completed", json!({ "contract_id": req.contract_id }));
    Ok(Json(body))
}
