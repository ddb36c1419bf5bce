//! Workflow error taxonomy.
//!
//! Every phase operation fails with one of these; none are retried by the
//! engine. Store-level errors are folded in at the boundary: a missing row
//! becomes [`WorkflowError::NotFound`], a unique-index violation (contract
//! number, payment proof number) becomes [`WorkflowError::Conflict`], and
//! anything else stays wrapped as [`WorkflowError::Database`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Errors produced by the leasing workflow engine.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// Missing or non-positive id, or a malformed structural field.
    #[error("invalid input")]
    InvalidInput,
    /// Survey decision string outside the accepted set.
    #[error("invalid workflow decision")]
    InvalidDecision,
    /// Operation requires the contract to be in `draft`.
    #[error("contract must be in draft status")]
    ContractNotDraft,
    /// Operation requires the contract to be in `approved`.
    #[error("contract must be in approved status")]
    ContractNotApproved,
    /// Requested status change is not in the permitted-transition table.
    #[error("invalid contract status transition")]
    InvalidStatusTransition,
    /// Selected motor unit is already booked or leased.
    #[error("motor unit is not ready")]
    MotorUnitNotReady,
    /// Down payment violates the product's percentage envelope.
    #[error("down payment is outside allowed product range")]
    DpOutOfRange,
    /// Payment amount must be strictly positive.
    #[error("invalid payment amount")]
    InvalidPaymentAmount,
    /// Target row is absent.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Unique-constraint violation surfaced by the store.
    #[error("duplicate value violates a unique constraint")]
    Conflict,
    /// Any other store failure.
    #[error("database error")]
    Database(#[source] DieselError),
}

impl WorkflowError {
    /// Stable machine-readable code used by the HTTP envelope.
    pub fn code(&self) -> &'static str {
        match self {
            WorkflowError::InvalidInput => "INVALID_INPUT",
            WorkflowError::InvalidDecision => "INVALID_DECISION",
            WorkflowError::ContractNotDraft => "CONTRACT_NOT_DRAFT",
            WorkflowError::ContractNotApproved => "CONTRACT_NOT_APPROVED",
            WorkflowError::InvalidStatusTransition => "INVALID_STATUS_TRANSITION",
            WorkflowError::MotorUnitNotReady => "MOTOR_UNIT_NOT_READY",
            WorkflowError::DpOutOfRange => "DP_OUT_OF_RANGE",
            WorkflowError::InvalidPaymentAmount => "INVALID_PAYMENT_AMOUNT",
            WorkflowError::NotFound(_) => "NOT_FOUND",
            WorkflowError::Conflict => "CONFLICT",
            WorkflowError::Database(_) => "INTERNAL",
        }
    }
}

impl From<DieselError> for WorkflowError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => WorkflowError::NotFound("record"),
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                WorkflowError::Conflict
            }
            other => WorkflowError::Database(other),
        }
    }
}
