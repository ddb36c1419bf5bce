//! Application submission: the entry point of the workflow.

use chrono::Utc;
use diesel::prelude::*;

use crate::dates;
use crate::error::WorkflowError;
use crate::models::master::{LeasingProduct, Motor};
use crate::models::{LeasingContract, NewLeasingContract};
use crate::workflow::input::SubmitApplicationInput;
use crate::workflow::status::{ContractStatus, MotorStatus};
use crate::workflow::{insert_contract_documents, money, tasks};

/// Create a leasing contract in `draft` for a ready motor unit.
///
/// Books the unit, computes the money columns from the product's flat rate,
/// stores the accepted document descriptors, and materialises the task
/// checklist from the template catalogue. Everything happens inside one
/// immediate transaction: a concurrent submitter for the same unit either
/// waits and sees `booked`, or wins the unit itself.
pub fn submit_application(
    conn: &mut SqliteConnection,
    input: &SubmitApplicationInput,
) -> Result<LeasingContract, WorkflowError> {
    use crate::schema::leasing_contract;
    use crate::schema::leasing_product::dsl as lp;
    use crate::schema::motors::dsl as m;

    if input.customer_id < 1
        || input.motor_id < 1
        || input.product_id < 1
        || input.dp_dibayar <= 0.0
    {
        return Err(WorkflowError::InvalidInput);
    }

    let request_date = input.request_date.unwrap_or_else(Utc::now);

    let contract = conn.immediate_transaction(|tx| {
        let motor: Motor = m::motors
            .find(input.motor_id)
            .select(Motor::as_select())
            .first(tx)
            .optional()?
            .ok_or(WorkflowError::NotFound("motor"))?;
        if !motor
            .status_unit
            .trim()
            .eq_ignore_ascii_case(MotorStatus::Ready.as_str())
        {
            return Err(WorkflowError::MotorUnitNotReady);
        }

        let product: LeasingProduct = lp::leasing_product
            .find(input.product_id)
            .select(LeasingProduct::as_select())
            .first(tx)
            .optional()?
            .ok_or(WorkflowError::NotFound("product"))?;

        let tenor = if input.tenor_bulan > 0 {
            input.tenor_bulan
        } else {
            product.tenor_bulan
        };
        if tenor <= 0 {
            return Err(WorkflowError::InvalidInput);
        }

        let (min_dp, max_dp) =
            money::dp_bounds(motor.harga_otr, product.dp_persen_min, product.dp_persen_max);
        if input.dp_dibayar < min_dp || input.dp_dibayar > max_dp {
            return Err(WorkflowError::DpOutOfRange);
        }

        let terms =
            money::instalment_terms(motor.harga_otr, input.dp_dibayar, product.bunga_flat, tenor);

        let request_s = dates::to_rfc3339_millis(request_date);
        let mulai_cicil_s = dates::to_rfc3339_millis(dates::add_months(request_date, 1));

        let row = NewLeasingContract {
            request_date: &request_s,
            tanggal_mulai_cicil: &mulai_cicil_s,
            tenor_bulan: tenor,
            nilai_kendaraan: motor.harga_otr,
            dp_dibayar: input.dp_dibayar,
            pokok_pinjaman: terms.pokok_pinjaman,
            total_pinjaman: terms.total_pinjaman,
            cicilan_per_bulan: terms.cicilan_per_bulan,
            status: ContractStatus::Draft.as_str(),
            customer_id: input.customer_id,
            motor_id: input.motor_id,
            product_id: input.product_id,
        };
        let contract: LeasingContract = diesel::insert_into(leasing_contract::table)
            .values(&row)
            .returning(LeasingContract::as_returning())
            .get_result(tx)?;

        diesel::update(m::motors.find(motor.motor_id))
            .set(m::status_unit.eq(MotorStatus::Booked.as_str()))
            .execute(tx)?;

        insert_contract_documents(tx, contract.contract_id, &input.documents)?;
        tasks::bootstrap_tasks_from_template(tx, contract.contract_id, request_date)?;

        Ok(contract)
    })?;

    tracing::info!(
        contract_id = contract.contract_id,
        motor_id = contract.motor_id,
        "leasing application submitted"
    );
    Ok(contract)
}
