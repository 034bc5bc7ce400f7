//! Error types for wallet and task operations.

use thiserror::Error;

use crate::Amount;
use crate::model::{TaskId, TaskState, VendorId, WithdrawalId, WithdrawalStatus};

/// Top-level error returned by [`Engine::apply`](super::Engine::apply) and
/// the named operation methods.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Task(#[from] TaskOpError),

    #[error("ledger posting failed: {0}")]
    Ledger(#[from] LedgerError),

    #[error("withdrawal failed: {0}")]
    Withdrawal(#[from] WithdrawalError),

    /// Policy gate, distinct from any balance shortfall: the caller should
    /// route the vendor to the mandatory-deposit flow, not a generic top-up.
    #[error("vendor {0} must make the mandatory security deposit before accepting tasks")]
    MandatoryDepositRequired(VendorId),

    /// Cash reconciliation requires the upstream two-step confirmation.
    #[error("cash collection for task {0} was not confirmed")]
    CashNotConfirmed(TaskId),
}

/// Error during ledger posting.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient funds for vendor {vendor}: balance {balance}, required {required}")]
    InsufficientFunds {
        vendor: VendorId,
        balance: Amount,
        required: Amount,
    },

    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Amount),
}

/// The task operation being performed, for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOp {
    Create,
    Assign,
    Accept,
    Decline,
    Start,
    Complete,
    CollectCash,
    Cancel,
    Reassign,
}

/// Unified error for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskOpError {
    #[error("{0:?}: task {1} not found")]
    TaskNotFound(TaskOp, TaskId),

    #[error("{0:?}: task {1} already exists")]
    DuplicateTask(TaskOp, TaskId),

    #[error("{0:?}: task {1} is assigned to vendor {2}, not {3}")]
    VendorMismatch(TaskOp, TaskId, VendorId, VendorId),

    #[error("{0:?}: task {1} is not assigned to any vendor")]
    NotAssigned(TaskOp, TaskId),

    /// The attempted edge is not in the lifecycle table; the task is
    /// unchanged.
    #[error("{0:?}: task {1} is in state {2:?}, transition not allowed")]
    InvalidTransition(TaskOp, TaskId, TaskState),

    /// A declined task may only be reassigned to a different vendor.
    #[error("{0:?}: task {1} was declined by vendor {2}, reassign to a different vendor")]
    SameVendor(TaskOp, TaskId, VendorId),
}

/// Error during withdrawal request or resolution.
#[derive(Debug, Error)]
pub enum WithdrawalError {
    #[error(
        "insufficient withdrawable funds for vendor {vendor}: withdrawable {withdrawable}, requested {requested}"
    )]
    InsufficientFunds {
        vendor: VendorId,
        withdrawable: Amount,
        requested: Amount,
    },

    #[error("withdrawal request {0} not found")]
    NotFound(WithdrawalId),

    /// Recoverable: reports the resolution that already stands rather than
    /// reapplying or corrupting it.
    #[error("withdrawal request {0} already resolved as {1:?}")]
    AlreadyResolved(WithdrawalId, WithdrawalStatus),
}
