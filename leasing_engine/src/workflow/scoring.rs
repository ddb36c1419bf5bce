//! Credit scoring: automatic approval or manual review.

use diesel::prelude::*;

use crate::error::WorkflowError;
use crate::workflow::input::AutoScoringInput;
use crate::workflow::status::{
    ContractStatus, TaskAttrStatus, TaskStatus, transition_contract,
};
use crate::workflow::{lock_contract, tasks};

/// Apply the scoring decision to a `draft` contract.
///
/// The scoring task completes regardless of the outcome. Auto-approval moves
/// the contract to `approved` and closes pre-approval; otherwise the manual
/// review task opens and the contract either stays in `draft` (review still
/// pending), gets approved, or is cancelled with the motor unit released.
pub fn process_auto_scoring(
    conn: &mut SqliteConnection,
    input: &AutoScoringInput,
) -> Result<(), WorkflowError> {
    if input.contract_id < 1 {
        return Err(WorkflowError::InvalidInput);
    }

    conn.immediate_transaction(|tx| {
        let mut contract = lock_contract(tx, input.contract_id)?;
        if contract.status != ContractStatus::Draft.as_str() {
            return Err(WorkflowError::ContractNotDraft);
        }

        tasks::update_task_status_by_keyword(
            tx,
            contract.contract_id,
            "scoring",
            TaskStatus::Completed,
        )?;

        if input.auto_approved {
            transition_contract(tx, &mut contract, ContractStatus::Approved)?;
            tasks::update_task_status_by_keyword(
                tx,
                contract.contract_id,
                "pre-approval",
                TaskStatus::Completed,
            )?;
            tasks::append_task_note_by_keyword(
                tx,
                contract.contract_id,
                "scoring",
                "auto_scoring_note",
                &input.note,
                TaskAttrStatus::Completed,
            )?;
            tracing::info!(contract_id = contract.contract_id, "auto scoring approved");
            return Ok(());
        }

        tasks::update_task_status_by_keyword(
            tx,
            contract.contract_id,
            "review",
            TaskStatus::InProgress,
        )?;
        tasks::append_task_note_by_keyword(
            tx,
            contract.contract_id,
            "review",
            "manual_review_note",
            &input.note,
            TaskAttrStatus::Pending,
        )?;

        if !input.manual_review_ready {
            return Ok(());
        }

        if input.manual_approved {
            transition_contract(tx, &mut contract, ContractStatus::Approved)?;
            tasks::update_task_status_by_keyword(
                tx,
                contract.contract_id,
                "review",
                TaskStatus::Completed,
            )?;
            tracing::info!(contract_id = contract.contract_id, "manual review approved");
            return Ok(());
        }

        transition_contract(tx, &mut contract, ContractStatus::Canceled)?;
        tasks::release_motor_if_booked(tx, contract.motor_id)?;
        tasks::update_task_status_by_keyword(
            tx,
            contract.contract_id,
            "review",
            TaskStatus::Cancelled,
        )?;
        tracing::info!(contract_id = contract.contract_id, "manual review rejected");
        Ok(())
    })
}
