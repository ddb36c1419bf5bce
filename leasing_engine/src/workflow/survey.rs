//! Field survey result: approve, reject, or demand a larger down payment.

use diesel::prelude::*;

use crate::error::WorkflowError;
use crate::models::master::LeasingProduct;
use crate::workflow::input::{SurveyInput, survey_decision};
use crate::workflow::status::{
    ContractStatus, TaskAttrStatus, TaskStatus, transition_contract,
};
use crate::workflow::{lock_contract, money, tasks};

/// Apply the surveyor's decision to an `approved` contract.
///
/// `request_additional_dp` sends the contract back to `draft` with the DP,
/// principal, total, and instalment recomputed against the same product.
/// The replacement DP must exceed the current one and still fit the
/// product's percentage envelope for this contract's vehicle value.
pub fn process_survey_result(
    conn: &mut SqliteConnection,
    input: &SurveyInput,
) -> Result<(), WorkflowError> {
    use crate::schema::leasing_contract::dsl as lc;
    use crate::schema::leasing_product::dsl as lp;

    if input.contract_id < 1 {
        return Err(WorkflowError::InvalidInput);
    }

    conn.immediate_transaction(|tx| {
        let mut contract = lock_contract(tx, input.contract_id)?;
        if contract.status != ContractStatus::Approved.as_str() {
            return Err(WorkflowError::ContractNotApproved);
        }

        match input.decision.as_str() {
            survey_decision::APPROVE => {
                tasks::update_task_status_by_keyword(
                    tx,
                    contract.contract_id,
                    "survei",
                    TaskStatus::Completed,
                )?;
                tasks::append_task_note_by_keyword(
                    tx,
                    contract.contract_id,
                    "survei",
                    "survey_note",
                    &input.note,
                    TaskAttrStatus::Completed,
                )?;
                Ok(())
            }

            survey_decision::REJECT => {
                transition_contract(tx, &mut contract, ContractStatus::Canceled)?;
                tasks::release_motor_if_booked(tx, contract.motor_id)?;
                tasks::update_task_status_by_keyword(
                    tx,
                    contract.contract_id,
                    "survei",
                    TaskStatus::Cancelled,
                )?;
                tasks::append_task_note_by_keyword(
                    tx,
                    contract.contract_id,
                    "survei",
                    "survey_reject_reason",
                    &input.note,
                    TaskAttrStatus::Cancelled,
                )?;
                tracing::info!(contract_id = contract.contract_id, "survey rejected");
                Ok(())
            }

            survey_decision::REQUEST_ADDITIONAL_DP => {
                if input.additional_dp <= contract.dp_dibayar {
                    return Err(WorkflowError::DpOutOfRange);
                }

                let product: LeasingProduct = lp::leasing_product
                    .find(contract.product_id)
                    .select(LeasingProduct::as_select())
                    .first(tx)
                    .optional()?
                    .ok_or(WorkflowError::NotFound("product"))?;

                let (min_dp, max_dp) = money::dp_bounds(
                    contract.nilai_kendaraan,
                    product.dp_persen_min,
                    product.dp_persen_max,
                );
                if input.additional_dp < min_dp || input.additional_dp > max_dp {
                    return Err(WorkflowError::DpOutOfRange);
                }

                let terms = money::instalment_terms(
                    contract.nilai_kendaraan,
                    input.additional_dp,
                    product.bunga_flat,
                    contract.tenor_bulan,
                );

                transition_contract(tx, &mut contract, ContractStatus::Draft)?;
                diesel::update(lc::leasing_contract.find(contract.contract_id))
                    .set((
                        lc::dp_dibayar.eq(input.additional_dp),
                        lc::pokok_pinjaman.eq(terms.pokok_pinjaman),
                        lc::total_pinjaman.eq(terms.total_pinjaman),
                        lc::cicilan_per_bulan.eq(terms.cicilan_per_bulan),
                    ))
                    .execute(tx)?;

                tasks::update_task_status_by_keyword(
                    tx,
                    contract.contract_id,
                    "survei",
                    TaskStatus::Completed,
                )?;
                tasks::append_task_note_by_keyword(
                    tx,
                    contract.contract_id,
                    "survei",
                    "additional_dp_request",
                    &input.note,
                    TaskAttrStatus::Pending,
                )?;
                tracing::info!(
                    contract_id = contract.contract_id,
                    additional_dp = input.additional_dp,
                    "survey requested additional down payment"
                );
                Ok(())
            }

            _ => Err(WorkflowError::InvalidDecision),
        }
    })
}
