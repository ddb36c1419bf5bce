//! Initial down-payment recording.

use chrono::Utc;
use diesel::prelude::*;

use crate::dates;
use crate::error::WorkflowError;
use crate::models::NewPayment;
use crate::workflow::input::InitialPaymentInput;
use crate::workflow::status::{ContractStatus, TaskStatus};
use crate::workflow::{lock_contract, tasks};

/// Insert the initial payment row for an `approved` (or already `active`)
/// contract and close the DP-payment task.
///
/// The payment is appended to the ledger with no schedule linkage; a
/// duplicate proof number surfaces as `Conflict` from the unique index.
pub fn record_initial_payment(
    conn: &mut SqliteConnection,
    input: &InitialPaymentInput,
) -> Result<(), WorkflowError> {
    use crate::schema::payments;

    if input.contract_id < 1 || input.nomor_bukti.trim().is_empty() {
        return Err(WorkflowError::InvalidInput);
    }
    if input.jumlah_bayar <= 0.0 {
        return Err(WorkflowError::InvalidPaymentAmount);
    }

    let tanggal_bayar = input.tanggal_bayar.unwrap_or_else(Utc::now);

    conn.immediate_transaction(|tx| {
        let contract = lock_contract(tx, input.contract_id)?;
        let status = ContractStatus::from_db(&contract.status);
        if !matches!(
            status,
            Some(ContractStatus::Approved) | Some(ContractStatus::Active)
        ) {
            return Err(WorkflowError::InvalidStatusTransition);
        }

        let tanggal_s = dates::to_rfc3339_millis(tanggal_bayar);
        let row = NewPayment {
            nomor_bukti: input.nomor_bukti.trim(),
            jumlah_bayar: input.jumlah_bayar,
            tanggal_bayar: &tanggal_s,
            metode_pembayaran: input.metode_pembayaran.trim(),
            provider: input.provider.trim(),
            contract_id: contract.contract_id,
            schedule_id: None,
        };
        diesel::insert_into(payments::table).values(&row).execute(tx)?;

        tasks::update_task_status_by_keyword(
            tx,
            contract.contract_id,
            "pembayaran dp",
            TaskStatus::Completed,
        )?;
        tracing::info!(
            contract_id = contract.contract_id,
            jumlah_bayar = input.jumlah_bayar,
            "initial payment recorded"
        );
        Ok(())
    })
}
