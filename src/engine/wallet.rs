//! Vendor wallet state: running balance, aggregates, latches, and the
//! append-only ledger that backs them.

use chrono::{DateTime, Utc};

use super::error::LedgerError;
use crate::Amount;
use crate::model::{EntryId, EntryKind, LedgerEntry, VendorId};

/// A vendor's wallet, the single source of truth for their money.
///
/// `balance` is always the running sum of posted ledger entries; it is never
/// recomputed from external state. The deposit flags are one-way latches:
/// once true they never revert, even if the balance later drains.
#[derive(Debug)]
pub struct VendorWallet {
    vendor: VendorId,
    balance: Amount,
    /// Portion of the balance earmarked as the mandatory deposit, excluded
    /// from the withdrawable balance.
    security_deposit: Amount,
    has_initial_deposit: bool,
    has_mandatory_deposit: bool,
    total_deposits: Amount,
    total_earnings: Amount,
    total_penalties: Amount,
    total_withdrawals: Amount,
    first_task_assigned_at: Option<DateTime<Utc>>,
    ledger: Vec<LedgerEntry>,
}

impl VendorWallet {
    pub fn new(vendor: VendorId) -> Self {
        Self {
            vendor,
            balance: Amount::ZERO,
            security_deposit: Amount::ZERO,
            has_initial_deposit: false,
            has_mandatory_deposit: false,
            total_deposits: Amount::ZERO,
            total_earnings: Amount::ZERO,
            total_penalties: Amount::ZERO,
            total_withdrawals: Amount::ZERO,
            first_task_assigned_at: None,
            ledger: Vec::new(),
        }
    }

    pub fn vendor(&self) -> VendorId {
        self.vendor
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn security_deposit(&self) -> Amount {
        self.security_deposit
    }

    /// Balance available for payout: what remains above the earmarked
    /// security deposit, clamped at zero.
    pub fn withdrawable(&self) -> Amount {
        let free = self.balance - self.security_deposit;
        if free.is_negative() { Amount::ZERO } else { free }
    }

    pub fn has_initial_deposit(&self) -> bool {
        self.has_initial_deposit
    }

    pub fn has_mandatory_deposit(&self) -> bool {
        self.has_mandatory_deposit
    }

    pub fn total_deposits(&self) -> Amount {
        self.total_deposits
    }

    pub fn total_earnings(&self) -> Amount {
        self.total_earnings
    }

    pub fn total_penalties(&self) -> Amount {
        self.total_penalties
    }

    pub fn total_withdrawals(&self) -> Amount {
        self.total_withdrawals
    }

    pub fn first_task_assigned_at(&self) -> Option<DateTime<Utc>> {
        self.first_task_assigned_at
    }

    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Latch the initial-deposit flag. One-way: never resets.
    pub(super) fn latch_initial_deposit(&mut self) {
        self.has_initial_deposit = true;
    }

    /// Latch the mandatory-deposit flag and earmark the security deposit.
    /// One-way: never resets, even if the balance later drops below the
    /// threshold.
    pub(super) fn latch_mandatory_deposit(&mut self, earmark: Amount) {
        self.has_mandatory_deposit = true;
        self.security_deposit = earmark;
    }

    /// Stamp the first-ever assignment. Idempotent: later calls are no-ops.
    pub(super) fn record_first_assignment(&mut self, at: DateTime<Utc>) {
        if self.first_task_assigned_at.is_none() {
            self.first_task_assigned_at = Some(at);
        }
    }

    /// Append a ledger entry and update the balance and aggregates as one
    /// unit.
    ///
    /// `amount` is signed: credits positive, debits negative. Guarded kinds
    /// (withdrawal, cash deduction) fail with [`LedgerError::InsufficientFunds`]
    /// rather than overdraw, leaving the wallet untouched. Unguarded debits
    /// (penalties, acceptance fees) may push the balance negative.
    pub(super) fn post(
        &mut self,
        id: EntryId,
        kind: EntryKind,
        amount: Amount,
        description: String,
        reference: Option<u64>,
    ) -> Result<&LedgerEntry, LedgerError> {
        let next = self.balance + amount;
        if kind.guarded() && next.is_negative() {
            return Err(LedgerError::InsufficientFunds {
                vendor: self.vendor,
                balance: self.balance,
                required: -amount,
            });
        }

        self.balance = next;
        match kind {
            EntryKind::Deposit => self.total_deposits += amount,
            EntryKind::Earning => self.total_earnings += amount,
            EntryKind::Penalty => self.total_penalties += -amount,
            EntryKind::Withdrawal => self.total_withdrawals += -amount,
            // Acceptance fees, cash deductions and manual adjustments have
            // no dedicated aggregate.
            EntryKind::TaskAcceptanceFee
            | EntryKind::CashCollectionDeduction
            | EntryKind::ManualAdjustment => {}
        }

        self.ledger.push(LedgerEntry {
            id,
            vendor: self.vendor,
            kind,
            amount,
            description,
            reference,
            created_at: Utc::now(),
            balance_after: self.balance,
        });

        Ok(self.ledger.last().expect("entry just pushed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(
        wallet: &mut VendorWallet,
        id: EntryId,
        kind: EntryKind,
        amount: Amount,
    ) -> Result<EntryId, LedgerError> {
        wallet
            .post(id, kind, amount, String::new(), None)
            .map(|e| e.id)
    }

    #[test]
    fn balance_is_running_sum_with_snapshots() {
        let mut wallet = VendorWallet::new(1);
        post(&mut wallet, 1, EntryKind::Deposit, Amount::from_rupees(500)).unwrap();
        post(&mut wallet, 2, EntryKind::Penalty, -Amount::from_rupees(100)).unwrap();
        post(&mut wallet, 3, EntryKind::Earning, Amount::from_rupees(250)).unwrap();

        assert_eq!(wallet.balance(), Amount::from_rupees(650));

        // balance_after is the prefix sum up to and including each entry
        let mut running = Amount::ZERO;
        for entry in wallet.ledger() {
            running += entry.amount;
            assert_eq!(entry.balance_after, running);
        }
        assert_eq!(running, wallet.balance());
    }

    #[test]
    fn aggregates_track_kinds() {
        let mut wallet = VendorWallet::new(1);
        post(&mut wallet, 1, EntryKind::Deposit, Amount::from_rupees(2000)).unwrap();
        post(&mut wallet, 2, EntryKind::Earning, Amount::from_rupees(300)).unwrap();
        post(&mut wallet, 3, EntryKind::Penalty, -Amount::from_rupees(100)).unwrap();
        post(&mut wallet, 4, EntryKind::Withdrawal, -Amount::from_rupees(50)).unwrap();

        assert_eq!(wallet.total_deposits(), Amount::from_rupees(2000));
        assert_eq!(wallet.total_earnings(), Amount::from_rupees(300));
        assert_eq!(wallet.total_penalties(), Amount::from_rupees(100));
        assert_eq!(wallet.total_withdrawals(), Amount::from_rupees(50));
    }

    #[test]
    fn guarded_debit_cannot_overdraw() {
        let mut wallet = VendorWallet::new(1);
        post(&mut wallet, 1, EntryKind::Deposit, Amount::from_rupees(100)).unwrap();

        let result = post(
            &mut wallet,
            2,
            EntryKind::Withdrawal,
            -Amount::from_rupees(101),
        );
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientFunds { vendor: 1, .. })
        ));

        // Untouched on failure: no entry, no balance change
        assert_eq!(wallet.balance(), Amount::from_rupees(100));
        assert_eq!(wallet.ledger().len(), 1);
    }

    #[test]
    fn unguarded_debit_may_overdraw() {
        let mut wallet = VendorWallet::new(1);
        post(&mut wallet, 1, EntryKind::Deposit, Amount::from_rupees(50)).unwrap();
        post(&mut wallet, 2, EntryKind::Penalty, -Amount::from_rupees(100)).unwrap();

        assert_eq!(wallet.balance(), Amount::from_rupees(-50));
        assert!(wallet.balance().is_negative());
    }

    #[test]
    fn guarded_debit_to_exactly_zero_succeeds() {
        let mut wallet = VendorWallet::new(1);
        post(&mut wallet, 1, EntryKind::Deposit, Amount::from_rupees(100)).unwrap();
        post(
            &mut wallet,
            2,
            EntryKind::Withdrawal,
            -Amount::from_rupees(100),
        )
        .unwrap();
        assert!(wallet.balance().is_zero());
    }

    #[test]
    fn latches_are_one_way() {
        let mut wallet = VendorWallet::new(1);
        wallet.latch_initial_deposit();
        wallet.latch_mandatory_deposit(Amount::from_rupees(2000));
        assert!(wallet.has_initial_deposit());
        assert!(wallet.has_mandatory_deposit());

        // Drain the balance far below the threshold; the latch holds
        post(
            &mut wallet,
            1,
            EntryKind::Penalty,
            -Amount::from_rupees(5000),
        )
        .unwrap();
        assert!(wallet.balance().is_negative());
        assert!(wallet.has_mandatory_deposit());
    }

    #[test]
    fn first_assignment_is_idempotent() {
        let mut wallet = VendorWallet::new(1);
        let first = Utc::now();
        wallet.record_first_assignment(first);
        let stamped = wallet.first_task_assigned_at().unwrap();

        wallet.record_first_assignment(Utc::now());
        assert_eq!(wallet.first_task_assigned_at().unwrap(), stamped);
    }

    #[test]
    fn withdrawable_clamps_at_zero() {
        let mut wallet = VendorWallet::new(1);
        post(&mut wallet, 1, EntryKind::Deposit, Amount::from_rupees(1000)).unwrap();
        wallet.latch_mandatory_deposit(Amount::from_rupees(2000));

        // balance 1000 below earmark 2000: nothing withdrawable
        assert_eq!(wallet.withdrawable(), Amount::ZERO);

        post(&mut wallet, 2, EntryKind::Earning, Amount::from_rupees(1500)).unwrap();
        assert_eq!(wallet.withdrawable(), Amount::from_rupees(500));
    }
}
