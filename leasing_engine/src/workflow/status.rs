//! Status vocabulary and the contract state machine.

use diesel::prelude::*;

use crate::error::WorkflowError;
use crate::models::LeasingContract;

/// Lifecycle status of a leasing contract.
///
/// Stored as lowercase text; `canceled` is terminal, `active` can only be
/// cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractStatus {
    /// Freshly submitted, or sent back for DP rework after survey.
    Draft,
    /// Passed scoring; underwriting and fulfilment phases run here.
    Approved,
    /// Unit delivered, instalments running.
    Active,
    /// Rejected or withdrawn at any pre-delivery gate.
    Canceled,
}

impl ContractStatus {
    /// The stored text form.
    pub fn as_str(self) -> &'static str {
        match self {
            ContractStatus::Draft => "draft",
            ContractStatus::Approved => "approved",
            ContractStatus::Active => "active",
            ContractStatus::Canceled => "canceled",
        }
    }

    /// Parse the stored text form. Returns `None` for anything outside the
    /// four defined constants.
    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(ContractStatus::Draft),
            "approved" => Some(ContractStatus::Approved),
            "active" => Some(ContractStatus::Active),
            "canceled" => Some(ContractStatus::Canceled),
            _ => None,
        }
    }
}

/// Status of a physical motor unit in dealer inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorStatus {
    /// Available for allocation.
    Ready,
    /// Held by a live contract.
    Booked,
    /// Handed over to the customer.
    Leased,
}

impl MotorStatus {
    /// The stored text form.
    pub fn as_str(self) -> &'static str {
        match self {
            MotorStatus::Ready => "ready",
            MotorStatus::Booked => "booked",
            MotorStatus::Leased => "leased",
        }
    }
}

/// Status of a checklist task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Open since bootstrap.
    InProgress,
    /// Closed successfully; both actual dates are stamped.
    Completed,
    /// Closed by a rejection; only the actual end date is stamped.
    Cancelled,
}

impl TaskStatus {
    /// The stored text form.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }
}

/// Status of a task attribute (stub or note).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAttrStatus {
    /// Awaiting a value or a follow-up.
    Pending,
    /// Recorded as part of a successful step.
    Completed,
    /// Recorded as part of a rejection.
    Cancelled,
}

impl TaskAttrStatus {
    /// The stored text form.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskAttrStatus::Pending => "pending",
            TaskAttrStatus::Completed => "completed",
            TaskAttrStatus::Cancelled => "cancelled",
        }
    }
}

/// The exhaustive permitted-transition table.
///
/// `approved -> draft` covers DP rework requested by the field survey.
pub fn transition_allowed(current: ContractStatus, next: ContractStatus) -> bool {
    use ContractStatus::*;
    matches!(
        (current, next),
        (Draft, Approved)
            | (Draft, Canceled)
            | (Approved, Draft)
            | (Approved, Active)
            | (Approved, Canceled)
            | (Active, Canceled)
    )
}

/// Validate and persist a status change on a locked contract row.
///
/// A transition to the current status is a no-op. The in-memory `contract`
/// is updated to match the store on success.
pub fn transition_contract(
    conn: &mut SqliteConnection,
    contract: &mut LeasingContract,
    next: ContractStatus,
) -> Result<(), WorkflowError> {
    use crate::schema::leasing_contract::dsl as lc;

    let current = ContractStatus::from_db(&contract.status)
        .ok_or(WorkflowError::InvalidStatusTransition)?;
    if current == next {
        return Ok(());
    }
    if !transition_allowed(current, next) {
        return Err(WorkflowError::InvalidStatusTransition);
    }

    diesel::update(lc::leasing_contract.find(contract.contract_id))
        .set(lc::status.eq(next.as_str()))
        .execute(conn)?;
    contract.status = next.as_str().to_string();
    Ok(())
}
