//! Final underwriting approval.

use diesel::prelude::*;

use crate::error::WorkflowError;
use crate::workflow::input::FinalApprovalInput;
use crate::workflow::status::{
    ContractStatus, TaskAttrStatus, TaskStatus, transition_contract,
};
use crate::workflow::{lock_contract, tasks};

/// Record the final approval verdict on an `approved` contract.
///
/// Approval closes the approval tasks and leaves the status untouched; a
/// rejection cancels the contract, releases the booked unit, and records the
/// reason on the approval task.
pub fn process_final_approval(
    conn: &mut SqliteConnection,
    input: &FinalApprovalInput,
) -> Result<(), WorkflowError> {
    if input.contract_id < 1 {
        return Err(WorkflowError::InvalidInput);
    }

    conn.immediate_transaction(|tx| {
        let mut contract = lock_contract(tx, input.contract_id)?;
        if contract.status != ContractStatus::Approved.as_str() {
            return Err(WorkflowError::ContractNotApproved);
        }

        if input.approved {
            tasks::update_task_status_by_keyword(
                tx,
                contract.contract_id,
                "approval",
                TaskStatus::Completed,
            )?;
            tasks::append_task_note_by_keyword(
                tx,
                contract.contract_id,
                "approval",
                "final_approval_note",
                &input.note,
                TaskAttrStatus::Completed,
            )?;
            return Ok(());
        }

        transition_contract(tx, &mut contract, ContractStatus::Canceled)?;
        tasks::release_motor_if_booked(tx, contract.motor_id)?;
        tasks::update_task_status_by_keyword(
            tx,
            contract.contract_id,
            "approval",
            TaskStatus::Cancelled,
        )?;
        tasks::append_task_note_by_keyword(
            tx,
            contract.contract_id,
            "approval",
            "final_approval_reject_reason",
            &input.note,
            TaskAttrStatus::Cancelled,
        )?;
        tracing::info!(contract_id = contract.contract_id, "final approval rejected");
        Ok(())
    })
}
