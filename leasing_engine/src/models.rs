//! Diesel models mapping to the database schema.
//!
//! These types mirror the tables defined in the embedded migrations and in
//! [`crate::schema`] for use with Diesel's Queryable/Insertable APIs:
//! - [`crate::schema::leasing_contract`] — the contract and its money columns
//! - [`crate::schema::leasing_tasks`] — the per-contract workflow checklist
//! - [`crate::schema::leasing_task_attributes`] — checklist notes and stubs
//! - [`crate::schema::leasing_contract_documents`] — append-only document rows
//! - [`crate::schema::payments`] — the payment ledger
//!
//! See migrations for constraints and triggers (e.g., `updated_at` trigger on
//! `leasing_contract` and `ON DELETE CASCADE` FKs). Master-data rows (motors,
//! products, templates, roles) live in [`master`](crate::models::master).

pub mod master;

use crate::schema::*;
use diesel::prelude::*;

/// A row in [`crate::schema::leasing_contract`]: one leasing application and
/// its derived money figures.
///
/// Status is constrained to "draft" | "approved" | "active" | "canceled";
/// transitions are enforced by the workflow engine, not the store.
#[derive(Debug, Clone, Queryable, Identifiable, AsChangeset, Selectable, serde::Serialize)]
#[diesel(table_name = leasing_contract, primary_key(contract_id), check_for_backend(diesel::sqlite::Sqlite))]
pub struct LeasingContract {
    /// Database primary key. Populated by the DB.
    pub contract_id: i64,
    /// Contract number, unique when set; assigned at akad.
    pub contract_number: Option<String>,
    /// Application date in RFC3339 UTC.
    pub request_date: String,
    /// Signing date in RFC3339 UTC; NULL until akad.
    pub tanggal_akad: Option<String>,
    /// First instalment date in RFC3339 UTC.
    pub tanggal_mulai_cicil: String,
    /// Loan length in months.
    pub tenor_bulan: i16,
    /// Vehicle value (OTR price at submission).
    pub nilai_kendaraan: f64,
    /// Down payment paid by the customer.
    pub dp_dibayar: f64,
    /// Loan principal = vehicle value - down payment.
    pub pokok_pinjaman: f64,
    /// Principal plus flat-rate margin.
    pub total_pinjaman: f64,
    /// Monthly instalment = total / tenor.
    pub cicilan_per_bulan: f64,
    /// Contract status; see [`crate::workflow::ContractStatus`].
    pub status: String,
    /// Row creation timestamp in RFC3339 UTC.
    pub created_at: String,
    /// Row update timestamp in RFC3339 UTC (maintained by trigger on UPDATE).
    pub updated_at: String,
    /// FK to `customers.customer_id`.
    pub customer_id: i64,
    /// FK to `motors.motor_id`.
    pub motor_id: i64,
    /// FK to `leasing_product.product_id`.
    pub product_id: i64,
}

/// Insertable form of [`LeasingContract`] for creating new rows at submission.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = leasing_contract)]
pub struct NewLeasingContract<'a> {
    /// Application date in RFC3339 UTC.
    pub request_date: &'a str,
    /// First instalment date in RFC3339 UTC.
    pub tanggal_mulai_cicil: &'a str,
    /// Loan length in months.
    pub tenor_bulan: i16,
    /// Vehicle value (OTR price at submission).
    pub nilai_kendaraan: f64,
    /// Down payment paid by the customer.
    pub dp_dibayar: f64,
    /// Loan principal.
    pub pokok_pinjaman: f64,
    /// Principal plus flat-rate margin.
    pub total_pinjaman: f64,
    /// Monthly instalment.
    pub cicilan_per_bulan: f64,
    /// Initial status ("draft").
    pub status: &'a str,
    /// FK to `customers.customer_id`.
    pub customer_id: i64,
    /// FK to `motors.motor_id`.
    pub motor_id: i64,
    /// FK to `leasing_product.product_id`.
    pub product_id: i64,
}

/// A row in [`crate::schema::leasing_tasks`]: one checklist step of a contract.
///
/// Materialised from the template catalogue at submission; keyword helpers
/// mutate `status` and the actual dates during later phases.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable)]
#[diesel(table_name = leasing_tasks, primary_key(task_id), check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(LeasingContract, foreign_key = contract_id))]
pub struct LeasingTask {
    /// Database primary key.
    pub task_id: i64,
    /// Task name copied from the template; keyword matching runs on this.
    pub task_name: String,
    /// Planned start (the contract's request date), RFC3339 UTC.
    pub start_date: String,
    /// Planned deadline (start + 14 days), RFC3339 UTC.
    pub end_date: String,
    /// Set when the task completes.
    pub actual_start_date: Option<String>,
    /// Set when the task completes or is cancelled.
    pub actual_end_date: Option<String>,
    /// 1-based position in the checklist.
    pub sequence_no: i32,
    /// "inprogress" | "completed" | "cancelled".
    pub status: String,
    /// FK to [`LeasingContract::contract_id`].
    pub contract_id: i64,
    /// FK to `roles.role_id`, copied from the template.
    pub role_id: i64,
}

/// Insertable form of [`LeasingTask`], used by the template bootstrap.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = leasing_tasks)]
pub struct NewLeasingTask<'a> {
    /// Task name copied from the template.
    pub task_name: &'a str,
    /// Planned start, RFC3339 UTC.
    pub start_date: &'a str,
    /// Planned deadline, RFC3339 UTC.
    pub end_date: &'a str,
    /// 1-based position in the checklist.
    pub sequence_no: i32,
    /// Initial status ("inprogress").
    pub status: &'a str,
    /// FK to the owning contract.
    pub contract_id: i64,
    /// FK to the assigned role.
    pub role_id: i64,
}

/// A row in [`crate::schema::leasing_task_attributes`]: a note or stub on a task.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable)]
#[diesel(table_name = leasing_task_attributes, primary_key(attr_id), check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(LeasingTask, foreign_key = task_id))]
pub struct LeasingTaskAttribute {
    /// Database primary key.
    pub attr_id: i64,
    /// Attribute name (e.g., "survey_note").
    pub attr_name: String,
    /// Attribute value; empty for stubs created at bootstrap.
    pub attr_value: String,
    /// "pending" | "completed" | "cancelled".
    pub status: String,
    /// FK to [`LeasingTask::task_id`].
    pub task_id: i64,
}

/// Insertable form of [`LeasingTaskAttribute`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = leasing_task_attributes)]
pub struct NewLeasingTaskAttribute<'a> {
    /// Attribute name.
    pub attr_name: &'a str,
    /// Attribute value.
    pub attr_value: &'a str,
    /// Initial status.
    pub status: &'a str,
    /// FK to the owning task.
    pub task_id: i64,
}

/// A row in [`crate::schema::leasing_contract_documents`]: an uploaded artefact.
///
/// Append-only; inserted at submission and at delivery completion.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable)]
#[diesel(table_name = leasing_contract_documents, primary_key(document_id), check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(LeasingContract, foreign_key = contract_id))]
pub struct LeasingContractDocument {
    /// Database primary key.
    pub document_id: i64,
    /// Original file name.
    pub file_name: String,
    /// File size in bytes.
    pub file_size: f64,
    /// MIME type or extension tag.
    pub file_type: String,
    /// Storage URL.
    pub file_url: String,
    /// FK to [`LeasingContract::contract_id`].
    pub contract_id: i64,
}

/// Insertable form of [`LeasingContractDocument`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = leasing_contract_documents)]
pub struct NewLeasingContractDocument<'a> {
    /// Original file name.
    pub file_name: &'a str,
    /// File size in bytes.
    pub file_size: f64,
    /// MIME type or extension tag.
    pub file_type: &'a str,
    /// Storage URL.
    pub file_url: &'a str,
    /// FK to the owning contract.
    pub contract_id: i64,
}

/// A row in [`crate::schema::payments`]: one recorded payment.
///
/// Never mutated after insert. `schedule_id` stays NULL for the initial
/// payment recorded by the workflow.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable)]
#[diesel(table_name = payments, primary_key(payment_id), check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(LeasingContract, foreign_key = contract_id))]
pub struct Payment {
    /// Database primary key.
    pub payment_id: i64,
    /// Proof-of-payment number, unique across the ledger.
    pub nomor_bukti: String,
    /// Amount paid.
    pub jumlah_bayar: f64,
    /// Payment date in RFC3339 UTC.
    pub tanggal_bayar: String,
    /// Payment method (e.g., "transfer").
    pub metode_pembayaran: String,
    /// Payment provider or bank.
    pub provider: String,
    /// Row creation timestamp in RFC3339 UTC.
    pub created_at: String,
    /// FK to [`LeasingContract::contract_id`].
    pub contract_id: i64,
    /// Optional FK to `payment_schedule.schedule_id`.
    pub schedule_id: Option<i64>,
}

/// Insertable form of [`Payment`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payments)]
pub struct NewPayment<'a> {
    /// Proof-of-payment number.
    pub nomor_bukti: &'a str,
    /// Amount paid.
    pub jumlah_bayar: f64,
    /// Payment date in RFC3339 UTC.
    pub tanggal_bayar: &'a str,
    /// Payment method.
    pub metode_pembayaran: &'a str,
    /// Payment provider or bank.
    pub provider: &'a str,
    /// FK to the owning contract.
    pub contract_id: i64,
    /// Optional FK to a schedule row; always None from the workflow.
    pub schedule_id: Option<i64>,
}
