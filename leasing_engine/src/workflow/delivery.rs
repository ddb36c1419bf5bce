//! Delivery completion: handover of the unit to the customer.

use chrono::Utc;
use diesel::prelude::*;

use crate::dates;
use crate::error::WorkflowError;
use crate::workflow::input::DeliveryInput;
use crate::workflow::status::{
    ContractStatus, MotorStatus, TaskAttrStatus, TaskStatus, transition_contract,
};
use crate::workflow::{insert_contract_documents, lock_contract, tasks};

/// Complete the delivery of an `approved` contract.
///
/// The motor unit becomes `leased` (unconditionally; no release-if-booked
/// branch) and the contract goes `active`. Signed documents are stored,
/// delivery tasks close, and the delivery date is always recorded as a
/// `YYYY-MM-DD` note on the delivery task.
pub fn complete_delivery(
    conn: &mut SqliteConnection,
    input: &DeliveryInput,
) -> Result<(), WorkflowError> {
    use crate::schema::leasing_contract::dsl as lc;
    use crate::schema::motors::dsl as m;

    if input.contract_id < 1 || !input.customer_received {
        return Err(WorkflowError::InvalidInput);
    }

    let delivery_date = input.delivery_date.unwrap_or_else(Utc::now);

    conn.immediate_transaction(|tx| {
        let mut contract = lock_contract(tx, input.contract_id)?;
        if contract.status != ContractStatus::Approved.as_str() {
            return Err(WorkflowError::ContractNotApproved);
        }

        diesel::update(m::motors.find(contract.motor_id))
            .set(m::status_unit.eq(MotorStatus::Leased.as_str()))
            .execute(tx)?;

        transition_contract(tx, &mut contract, ContractStatus::Active)?;

        if let Some(mulai_cicil) = input.tanggal_mulai_cicil {
            diesel::update(lc::leasing_contract.find(contract.contract_id))
                .set(lc::tanggal_mulai_cicil.eq(dates::to_rfc3339_millis(mulai_cicil)))
                .execute(tx)?;
        }

        insert_contract_documents(tx, contract.contract_id, &input.contract_documents)?;

        tasks::update_task_status_by_keyword(
            tx,
            contract.contract_id,
            "delivery",
            TaskStatus::Completed,
        )?;
        if input.document_handover {
            tasks::append_task_note_by_keyword(
                tx,
                contract.contract_id,
                "delivery",
                "document_handover",
                &input.handover_note,
                TaskAttrStatus::Completed,
            )?;
        }
        tasks::append_task_note_by_keyword(
            tx,
            contract.contract_id,
            "delivery",
            "delivery_date",
            &dates::format_ymd(delivery_date),
            TaskAttrStatus::Completed,
        )?;

        tracing::info!(
            contract_id = contract.contract_id,
            motor_id = contract.motor_id,
            "delivery completed"
        );
        Ok(())
    })
}
