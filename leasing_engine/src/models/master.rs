//! Master-data models: dealer inventory, loan products, roles, and the
//! checklist template catalogue.
//!
//! These types mirror lookup/metadata tables the workflow engine reads but
//! (except for `motors.status_unit`) never writes:
//! - [`crate::schema::motors`] — physical units with an OTR price and a unit status
//! - [`crate::schema::leasing_product`] — loan products (tenor, DP envelope, flat rate)
//! - [`crate::schema::roles`] — role registry referenced by tasks and templates
//! - [`crate::schema::template_tasks`] / [`crate::schema::template_task_attributes`]
//!   — the master checklist copied onto every new contract

use diesel::prelude::*;

// ----------------------- motors -----------------------

/// A dealer inventory row in [`crate::schema::motors`](crate::schema::motors).
///
/// `status_unit` is constrained to "ready" | "booked" | "leased"; the workflow
/// engine owns its transitions.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::motors, primary_key(motor_id), check_for_backend(diesel::sqlite::Sqlite))]
pub struct Motor {
    /// Database primary key.
    pub motor_id: i64,
    /// Manufacturer brand.
    pub merk: String,
    /// Production year.
    pub tahun: i16,
    /// Colour.
    pub warna: String,
    /// Chassis number, unique per unit.
    pub nomor_rangka: String,
    /// Unit status: "ready" | "booked" | "leased".
    pub status_unit: String,
    /// On-the-road price; basis for DP percentage checks.
    pub harga_otr: f64,
    /// Row creation timestamp in RFC3339 UTC.
    pub created_at: String,
}

// ----------------------- leasing_product --------------

/// A loan product row in [`crate::schema::leasing_product`](crate::schema::leasing_product).
///
/// Read-only to the workflow engine.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::leasing_product, primary_key(product_id), check_for_backend(diesel::sqlite::Sqlite))]
pub struct LeasingProduct {
    /// Database primary key.
    pub product_id: i64,
    /// Product code, unique.
    pub kode_produk: String,
    /// Human-readable product name.
    pub nama_produk: String,
    /// Default tenor in months.
    pub tenor_bulan: i16,
    /// Minimum down payment, percent of OTR.
    pub dp_persen_min: f64,
    /// Maximum down payment, percent of OTR.
    pub dp_persen_max: f64,
    /// Flat annual interest rate, percent.
    pub bunga_flat: f64,
    /// Administrative fee.
    pub admin_fee: f64,
    /// Whether insurance is bundled.
    pub asuransi: bool,
    /// Row creation timestamp in RFC3339 UTC.
    pub created_at: String,
}

// ----------------------- roles ------------------------

/// A role registry row in [`crate::schema::roles`](crate::schema::roles).
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::roles, primary_key(role_id), check_for_backend(diesel::sqlite::Sqlite))]
pub struct Role {
    /// Database primary key.
    pub role_id: i64,
    /// Role name, unique (e.g., "credit_analyst").
    pub role_name: String,
}

/// Insertable form of [`Role`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::roles)]
pub struct NewRole<'a> {
    /// Role name, unique.
    pub role_name: &'a str,
}

// ------------------- template_tasks -------------------

/// A master checklist step in [`crate::schema::template_tasks`](crate::schema::template_tasks).
///
/// Ordered by `template_id`; every contract receives a copy at submission.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::template_tasks, primary_key(template_id), check_for_backend(diesel::sqlite::Sqlite))]
pub struct TemplateTask {
    /// Database primary key; ascending id defines checklist order.
    pub template_id: i64,
    /// Step name, unique; keyword matching runs on the contract-side copy.
    pub template_name: String,
    /// FK to [`Role::role_id`](crate::models::master::Role).
    pub role_id: i64,
}

/// Insertable form of [`TemplateTask`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::template_tasks)]
pub struct NewTemplateTask<'a> {
    /// Step name, unique.
    pub template_name: &'a str,
    /// FK to the assigned role.
    pub role_id: i64,
}

// ------------- template_task_attributes ---------------

/// A declared attribute of a template step, copied onto contracts as an
/// empty-valued stub.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Selectable)]
#[diesel(table_name = crate::schema::template_task_attributes, primary_key(attr_id), check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(TemplateTask, foreign_key = template_id))]
pub struct TemplateTaskAttribute {
    /// Database primary key.
    pub attr_id: i64,
    /// Attribute name.
    pub attr_name: String,
    /// FK to [`TemplateTask::template_id`].
    pub template_id: i64,
}

/// Insertable form of [`TemplateTaskAttribute`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::template_task_attributes)]
pub struct NewTemplateTaskAttribute<'a> {
    /// Attribute name.
    pub attr_name: &'a str,
    /// FK to the owning template step.
    pub template_id: i64,
}
