//! Core domain types for the vendor wallet and task lifecycle.

use chrono::{DateTime, Utc};

use crate::Amount;

/// Vendor identifier (stable id of an authenticated vendor principal).
pub type VendorId = u32;

/// Task identifier, shared by bookings and support tickets.
pub type TaskId = u32;

/// Ledger entry identifier, assigned monotonically by the engine.
pub type EntryId = u64;

/// Withdrawal request identifier, assigned monotonically by the engine.
pub type WithdrawalId = u64;

/// The kind of a wallet ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Externally verified payment into the wallet.
    Deposit,
    /// Service share credited on task completion.
    Earning,
    /// Automatic debit for a decline or cancellation.
    Penalty,
    /// Optional fee charged when a task is accepted.
    TaskAcceptanceFee,
    /// Platform commission deducted from cash collected in hand.
    CashCollectionDeduction,
    /// Approved payout to the vendor.
    Withdrawal,
    /// Admin-issued correction, signed either way.
    ManualAdjustment,
}

impl EntryKind {
    /// Whether a debit of this kind must not overdraw the wallet.
    ///
    /// Penalties and acceptance fees are allowed to push the balance
    /// negative; payouts and cash deductions are not.
    pub fn guarded(&self) -> bool {
        matches!(
            self,
            EntryKind::CashCollectionDeduction | EntryKind::Withdrawal
        )
    }
}

/// An immutable, append-only wallet ledger entry.
///
/// Entries are never updated or deleted; corrections are posted as new
/// offsetting entries.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub id: EntryId,
    pub vendor: VendorId,
    pub kind: EntryKind,
    /// Signed: credits positive, debits negative.
    pub amount: Amount,
    pub description: String,
    /// Task or withdrawal id this entry settles, if any.
    pub reference: Option<u64>,
    pub created_at: DateTime<Utc>,
    /// Running balance snapshot after this entry, for audit.
    pub balance_after: Amount,
}

/// Which legacy representation a task came from.
///
/// Bookings and support tickets expose different status strings upstream
/// but share one logical lifecycle; the flavor only affects display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFlavor {
    Booking,
    SupportTicket,
}

/// The unified task lifecycle.
///
/// `Unassigned -> Assigned -> {Accepted | Declined}`;
/// `Accepted -> {InProgress -> Completed | Cancelled}`.
/// Declined, Cancelled and Completed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Unassigned,
    Assigned,
    Accepted,
    InProgress,
    Completed,
    Declined,
    Cancelled,
}

impl TaskState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Completed | TaskState::Declined | TaskState::Cancelled
        )
    }

    /// The status string the booking API historically used for this state.
    pub fn booking_status(&self) -> &'static str {
        match self {
            TaskState::Unassigned => "confirmed",
            TaskState::Assigned => "waiting_for_engineer",
            TaskState::Accepted => "confirmed",
            TaskState::InProgress => "in_progress",
            TaskState::Completed => "completed",
            TaskState::Declined => "declined",
            TaskState::Cancelled => "cancelled",
        }
    }

    /// The status string the support-ticket API historically used.
    pub fn ticket_status(&self) -> &'static str {
        match self {
            TaskState::Unassigned | TaskState::Assigned => "Pending",
            TaskState::Accepted | TaskState::InProgress => "Accepted",
            TaskState::Completed => "Completed",
            TaskState::Declined => "Declined",
            TaskState::Cancelled => "Cancelled",
        }
    }
}

/// The vendor's recorded response to an assignment.
///
/// Kept consistent with [`TaskState`] by the engine; never set
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorResponse {
    #[default]
    None,
    Accepted,
    Declined,
}

/// A booking or support ticket moving through the assignment lifecycle.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub flavor: TaskFlavor,
    pub customer: String,
    pub billing_amount: Amount,
    /// Unset until assigned.
    pub vendor: Option<VendorId>,
    pub state: TaskState,
    pub vendor_response: VendorResponse,
    pub assigned_at: Option<DateTime<Utc>>,
    /// Audit-only reference to the cash photo, never validated.
    pub cash_photo: Option<String>,
}

impl Task {
    /// A freshly created task awaiting assignment.
    pub fn new(id: TaskId, flavor: TaskFlavor, customer: String, billing_amount: Amount) -> Self {
        Self {
            id,
            flavor,
            customer,
            billing_amount,
            vendor: None,
            state: TaskState::Unassigned,
            vendor_response: VendorResponse::None,
            assigned_at: None,
            cash_photo: None,
        }
    }

    /// The status string for this task's flavor, for boundary adapters.
    pub fn display_status(&self) -> &'static str {
        match self.flavor {
            TaskFlavor::Booking => self.state.booking_status(),
            TaskFlavor::SupportTicket => self.state.ticket_status(),
        }
    }
}

/// Resolution state of a withdrawal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalStatus {
    Pending,
    Approved,
    Declined,
}

/// A vendor-initiated payout request awaiting admin resolution.
#[derive(Debug, Clone)]
pub struct WithdrawalRequest {
    pub id: WithdrawalId,
    pub vendor: VendorId,
    pub amount: Amount,
    pub status: WithdrawalStatus,
    pub requested_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub admin_note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(TaskState::Completed.is_terminal());
        assert!(TaskState::Declined.is_terminal());
        assert!(TaskState::Cancelled.is_terminal());
        assert!(!TaskState::Assigned.is_terminal());
        assert!(!TaskState::InProgress.is_terminal());
    }

    #[test]
    fn guarded_kinds() {
        assert!(EntryKind::Withdrawal.guarded());
        assert!(EntryKind::CashCollectionDeduction.guarded());
        assert!(!EntryKind::Penalty.guarded());
        assert!(!EntryKind::ManualAdjustment.guarded());
    }

    #[test]
    fn booking_status_strings() {
        let task = Task::new(1, TaskFlavor::Booking, "cust".into(), Amount::from_rupees(500));
        assert_eq!(task.display_status(), "confirmed");

        let mut task = task;
        task.state = TaskState::Assigned;
        assert_eq!(task.display_status(), "waiting_for_engineer");
        task.state = TaskState::Declined;
        assert_eq!(task.display_status(), "declined");
    }

    #[test]
    fn ticket_status_strings() {
        let mut task = Task::new(
            2,
            TaskFlavor::SupportTicket,
            "cust".into(),
            Amount::from_rupees(500),
        );
        assert_eq!(task.display_status(), "Pending");
        task.state = TaskState::InProgress;
        assert_eq!(task.display_status(), "Accepted");
        task.state = TaskState::Cancelled;
        assert_eq!(task.display_status(), "Cancelled");
    }
}
