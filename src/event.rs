//! Outbox events emitted by the engine.
//!
//! Notification delivery is an external collaborator; the engine records
//! what happened and the caller drains the outbox and fans out. Nothing in
//! the engine depends on a consumer existing.

use crate::Amount;
use crate::model::{EntryId, TaskId, VendorId, WithdrawalId, WithdrawalStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TaskAssigned {
        task: TaskId,
        vendor: VendorId,
    },
    TaskAccepted {
        task: TaskId,
        vendor: VendorId,
    },
    TaskDeclined {
        task: TaskId,
        vendor: VendorId,
        /// Ledger entry of the decline penalty, when one was posted.
        penalty: Option<EntryId>,
    },
    TaskCompleted {
        task: TaskId,
        vendor: VendorId,
    },
    TaskCancelled {
        task: TaskId,
        vendor: VendorId,
        penalty: Option<EntryId>,
    },
    DepositRecorded {
        vendor: VendorId,
        amount: Amount,
    },
    /// The vendor's mandatory security deposit is now satisfied and latched.
    MandatoryDepositSatisfied {
        vendor: VendorId,
    },
    CashCollected {
        task: TaskId,
        vendor: VendorId,
        collected: Amount,
        deducted: Amount,
    },
    WithdrawalRequested {
        request: WithdrawalId,
        vendor: VendorId,
        amount: Amount,
    },
    WithdrawalResolved {
        request: WithdrawalId,
        vendor: VendorId,
        status: WithdrawalStatus,
    },
}
