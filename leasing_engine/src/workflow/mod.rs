//! Leasing workflow engine.
//!
//! ## What this does
//! Advances a leasing contract through its eight business phases, from
//! application submission to unit delivery, coordinating four coupled pieces
//! of state: the contract status, the allocated motor unit, the per-contract
//! task checklist, and the derived money columns.
//!
//! ## Transactions & consistency
//! Every phase operation wraps its whole body in a single **`BEGIN IMMEDIATE`**
//! transaction via `SqliteConnection::immediate_transaction`. The write lock is
//! taken before the first read, so concurrent operations against the same
//! contract (or the same motor unit) serialise: either the whole phase applies
//! or none of it does. Unit-status flips additionally re-check the current
//! value in their `WHERE` clause, so two submitters can never book one motor.
//!
//! ## Status discipline
//! Status changes go through [`status::transition_contract`], which enforces
//! the permitted-transition table. A transition to the current status is a
//! no-op; anything outside the table fails with
//! [`WorkflowError::InvalidStatusTransition`](crate::error::WorkflowError).

mod akad;
mod approval;
mod delivery;
mod fulfillment;
pub mod input;
pub mod money;
mod payment;
mod scoring;
pub mod status;
mod submit;
mod survey;
pub mod tasks;

pub use akad::execute_akad;
pub use approval::process_final_approval;
pub use delivery::complete_delivery;
pub use fulfillment::process_dealer_fulfillment;
pub use payment::record_initial_payment;
pub use scoring::process_auto_scoring;
pub use status::{ContractStatus, MotorStatus, TaskAttrStatus, TaskStatus};
pub use submit::submit_application;
pub use survey::process_survey_result;

use diesel::prelude::*;

use crate::error::WorkflowError;
use crate::models::{LeasingContract, NewLeasingContractDocument};
use input::ContractDocumentInput;

/// Read the target contract inside the current transaction.
///
/// Under `BEGIN IMMEDIATE` the transaction already holds the write lock, so
/// this read is the serialisation point the phase operations rely on.
pub(crate) fn lock_contract(
    conn: &mut SqliteConnection,
    contract_id: i64,
) -> Result<LeasingContract, WorkflowError> {
    use crate::schema::leasing_contract::dsl as lc;

    lc::leasing_contract
        .find(contract_id)
        .select(LeasingContract::as_select())
        .first(conn)
        .optional()?
        .ok_or(WorkflowError::NotFound("contract"))
}

/// Store uploaded document descriptors for a contract.
///
/// Descriptors with a blank file name or blank URL are dropped silently;
/// everything else is inserted as-is.
pub(crate) fn insert_contract_documents(
    conn: &mut SqliteConnection,
    contract_id: i64,
    documents: &[ContractDocumentInput],
) -> Result<(), WorkflowError> {
    use crate::schema::leasing_contract_documents;

    for doc in documents {
        if doc.file_name.trim().is_empty() || doc.file_url.trim().is_empty() {
            continue;
        }
        let row = NewLeasingContractDocument {
            file_name: &doc.file_name,
            file_size: doc.file_size,
            file_type: &doc.file_type,
            file_url: &doc.file_url,
            contract_id,
        };
        diesel::insert_into(leasing_contract_documents::table)
            .values(&row)
            .execute(conn)?;
    }
    Ok(())
}
