//! Typed inputs for the eight phase operations.
//!
//! Field names follow the wire contract of the HTTP binding (`dp_dibayar`,
//! `tenor_bulan`, `nomor_bukti`, ...). Optional timestamps default to the
//! current UTC time inside the operation.

use chrono::{DateTime, Utc};

/// Survey decision values accepted by
/// [`process_survey_result`](crate::workflow::process_survey_result).
pub mod survey_decision {
    /// Field survey passed; contract stays approved.
    pub const APPROVE: &str = "approve";
    /// Field survey failed; contract is cancelled and the unit released.
    pub const REJECT: &str = "reject";
    /// Surveyor requires a larger down payment; contract reworks in draft.
    pub const REQUEST_ADDITIONAL_DP: &str = "request_additional_dp";
}

/// One uploaded document descriptor.
///
/// Descriptors with a blank file name or blank URL are silently dropped by
/// the operations that accept them.
#[derive(Debug, Clone, Default)]
pub struct ContractDocumentInput {
    /// Original file name.
    pub file_name: String,
    /// File size in bytes.
    pub file_size: f64,
    /// MIME type or extension tag.
    pub file_type: String,
    /// Storage URL.
    pub file_url: String,
}

/// Input for [`submit_application`](crate::workflow::submit_application).
#[derive(Debug, Clone, Default)]
pub struct SubmitApplicationInput {
    /// Applying customer.
    pub customer_id: i64,
    /// Requested motor unit; must be `ready`.
    pub motor_id: i64,
    /// Loan product.
    pub product_id: i64,
    /// Down payment offered by the customer.
    pub dp_dibayar: f64,
    /// Tenor override in months; `<= 0` falls back to the product default.
    pub tenor_bulan: i16,
    /// Application date; defaults to now.
    pub request_date: Option<DateTime<Utc>>,
    /// Documents uploaded with the application.
    pub documents: Vec<ContractDocumentInput>,
}

/// Input for [`process_auto_scoring`](crate::workflow::process_auto_scoring).
#[derive(Debug, Clone, Default)]
pub struct AutoScoringInput {
    /// Target contract; must be in `draft`.
    pub contract_id: i64,
    /// Credit scoring passed automatically.
    pub auto_approved: bool,
    /// A manual reviewer has finished looking at the application.
    pub manual_review_ready: bool,
    /// The manual reviewer's verdict (only meaningful when review is ready).
    pub manual_approved: bool,
    /// Free-form note appended to the scoring/review task.
    pub note: String,
}

/// Input for [`process_survey_result`](crate::workflow::process_survey_result).
#[derive(Debug, Clone, Default)]
pub struct SurveyInput {
    /// Target contract; must be in `approved`.
    pub contract_id: i64,
    /// One of the [`survey_decision`] values; anything else is rejected.
    pub decision: String,
    /// Replacement down payment for `request_additional_dp`.
    pub additional_dp: f64,
    /// Surveyor's note.
    pub note: String,
}

/// Input for [`process_final_approval`](crate::workflow::process_final_approval).
#[derive(Debug, Clone, Default)]
pub struct FinalApprovalInput {
    /// Target contract; must be in `approved`.
    pub contract_id: i64,
    /// Final underwriting verdict.
    pub approved: bool,
    /// Approver's note.
    pub note: String,
}

/// Input for [`execute_akad`](crate::workflow::execute_akad).
#[derive(Debug, Clone, Default)]
pub struct AkadInput {
    /// Target contract; must be in `approved`.
    pub contract_id: i64,
    /// Contract number to assign; blank keeps any existing number.
    pub contract_number: String,
    /// Signing date; defaults to now.
    pub akad_date: Option<DateTime<Utc>>,
    /// Explicit first-instalment date; defaults to akad date + 1 month.
    pub tanggal_mulai_cicil: Option<DateTime<Utc>>,
    /// Auto-generate a `KTR-<year>-<id>` number when none exists.
    pub generate_contract_code: bool,
}

/// Input for [`record_initial_payment`](crate::workflow::record_initial_payment).
#[derive(Debug, Clone, Default)]
pub struct InitialPaymentInput {
    /// Target contract; must be `approved` or `active`.
    pub contract_id: i64,
    /// Proof-of-payment number, unique across the ledger.
    pub nomor_bukti: String,
    /// Amount paid; must be strictly positive.
    pub jumlah_bayar: f64,
    /// Payment date; defaults to now.
    pub tanggal_bayar: Option<DateTime<Utc>>,
    /// Payment method (e.g., "transfer").
    pub metode_pembayaran: String,
    /// Payment provider or bank.
    pub provider: String,
}

/// Input for [`process_dealer_fulfillment`](crate::workflow::process_dealer_fulfillment).
#[derive(Debug, Clone, Default)]
pub struct DealerFulfillmentInput {
    /// Target contract; must be in `approved`.
    pub contract_id: i64,
    /// The unit is on the floor, no back-order needed.
    pub unit_ready_stock: bool,
    /// Estimated back-order time in weeks; must be `>= 0` when not in stock.
    pub estimated_indent_week: i32,
    /// Dealer note; when blank an indent auto-text is generated.
    pub note: String,
}

/// Input for [`complete_delivery`](crate::workflow::complete_delivery).
#[derive(Debug, Clone, Default)]
pub struct DeliveryInput {
    /// Target contract; must be in `approved`.
    pub contract_id: i64,
    /// Handover date; defaults to now.
    pub delivery_date: Option<DateTime<Utc>>,
    /// Customer confirmed receipt; delivery cannot complete without it.
    pub customer_received: bool,
    /// Vehicle documents were handed over together with the unit.
    pub document_handover: bool,
    /// Note recorded with the document handover.
    pub handover_note: String,
    /// Override for the first-instalment date.
    pub tanggal_mulai_cicil: Option<DateTime<Utc>>,
    /// Signed contract documents uploaded at delivery.
    pub contract_documents: Vec<ContractDocumentInput>,
}
