//! Akad: contract signing.

use chrono::{Datelike, Utc};
use diesel::prelude::*;

use crate::dates;
use crate::error::WorkflowError;
use crate::workflow::input::AkadInput;
use crate::workflow::status::{ContractStatus, TaskStatus};
use crate::workflow::{lock_contract, tasks};

/// Record the signing of an `approved` contract.
///
/// Sets the akad date (defaulting to now) and the first-instalment date
/// (defaulting to akad + 1 calendar month). The contract number is taken
/// from the trimmed input; when that is blank, the contract has no number
/// yet, and `generate_contract_code` is set, a `KTR-<year>-<id>` code is
/// generated. The status does not change here.
pub fn execute_akad(conn: &mut SqliteConnection, input: &AkadInput) -> Result<(), WorkflowError> {
    use crate::schema::leasing_contract::dsl as lc;

    if input.contract_id < 1 {
        return Err(WorkflowError::InvalidInput);
    }

    let akad_date = input.akad_date.unwrap_or_else(Utc::now);

    conn.immediate_transaction(|tx| {
        let contract = lock_contract(tx, input.contract_id)?;
        if contract.status != ContractStatus::Approved.as_str() {
            return Err(WorkflowError::ContractNotApproved);
        }

        let mut contract_number = input.contract_number.trim().to_string();
        let has_existing_number = contract
            .contract_number
            .as_deref()
            .is_some_and(|n| !n.trim().is_empty());
        if contract_number.is_empty() && !has_existing_number && input.generate_contract_code {
            contract_number = format!("KTR-{}-{:06}", Utc::now().year(), contract.contract_id);
        }

        let mulai_cicil = input
            .tanggal_mulai_cicil
            .unwrap_or_else(|| dates::add_months(akad_date, 1));

        let akad_s = dates::to_rfc3339_millis(akad_date);
        let mulai_s = dates::to_rfc3339_millis(mulai_cicil);

        if contract_number.is_empty() {
            diesel::update(lc::leasing_contract.find(contract.contract_id))
                .set((
                    lc::tanggal_akad.eq(Some(akad_s)),
                    lc::tanggal_mulai_cicil.eq(mulai_s),
                ))
                .execute(tx)?;
        } else {
            diesel::update(lc::leasing_contract.find(contract.contract_id))
                .set((
                    lc::tanggal_akad.eq(Some(akad_s)),
                    lc::tanggal_mulai_cicil.eq(mulai_s),
                    lc::contract_number.eq(Some(contract_number.clone())),
                ))
                .execute(tx)?;
        }

        tasks::update_task_status_by_keyword(
            tx,
            contract.contract_id,
            "akad",
            TaskStatus::Completed,
        )?;
        tracing::info!(
            contract_id = contract.contract_id,
            contract_number = %contract_number,
            "akad executed"
        );
        Ok(())
    })
}
