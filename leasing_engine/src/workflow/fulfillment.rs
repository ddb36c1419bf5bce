//! Dealer fulfillment: unit availability check.

use diesel::prelude::*;

use crate::error::WorkflowError;
use crate::workflow::input::DealerFulfillmentInput;
use crate::workflow::status::{ContractStatus, TaskAttrStatus, TaskStatus};
use crate::workflow::{lock_contract, tasks};

/// Record whether the dealer can fulfil from stock or has to back-order.
///
/// Ready stock closes the PO task with a stock note; a back-order keeps the
/// PO task in progress and records the indent estimate (the dealer's note,
/// or an auto-generated "inden unit N minggu" text when the note is blank).
pub fn process_dealer_fulfillment(
    conn: &mut SqliteConnection,
    input: &DealerFulfillmentInput,
) -> Result<(), WorkflowError> {
    if input.contract_id < 1 {
        return Err(WorkflowError::InvalidInput);
    }
    if !input.unit_ready_stock && input.estimated_indent_week < 0 {
        return Err(WorkflowError::InvalidInput);
    }

    conn.immediate_transaction(|tx| {
        let contract = lock_contract(tx, input.contract_id)?;
        if contract.status != ContractStatus::Approved.as_str() {
            return Err(WorkflowError::ContractNotApproved);
        }

        if input.unit_ready_stock {
            tasks::update_task_status_by_keyword(
                tx,
                contract.contract_id,
                "po",
                TaskStatus::Completed,
            )?;
            tasks::append_task_note_by_keyword(
                tx,
                contract.contract_id,
                "po",
                "unit_stock_note",
                "unit ready stock",
                TaskAttrStatus::Completed,
            )?;
            return Ok(());
        }

        let note = input.note.trim();
        let note = if note.is_empty() {
            format!("inden unit {} minggu", input.estimated_indent_week)
        } else {
            note.to_string()
        };
        tasks::update_task_status_by_keyword(
            tx,
            contract.contract_id,
            "po",
            TaskStatus::InProgress,
        )?;
        tasks::append_task_note_by_keyword(
            tx,
            contract.contract_id,
            "po",
            "indent_info",
            &note,
            TaskAttrStatus::Pending,
        )?;
        Ok(())
    })
}
