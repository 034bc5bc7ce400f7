//! Vendor wallet and task-assignment engine.
//!
//! The engine owns vendor wallets (balance, ledger, deposit latches), tasks
//! moving through the unified booking/support-ticket lifecycle, and
//! withdrawal requests. Every monetary effect goes through a wallet's
//! append-only ledger; nothing writes balances directly. Commands can be
//! applied one at a time or drained from an async stream.

use std::collections::HashMap;

use chrono::Utc;
use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::Amount;
use crate::config::Config;
use crate::event::Event;
use crate::model::{
    EntryId, EntryKind, Task, TaskFlavor, TaskId, TaskState, VendorId, VendorResponse,
    WithdrawalId, WithdrawalRequest, WithdrawalStatus,
};

pub mod error;
mod policy;
mod wallet;

pub use error::{EngineError, LedgerError, TaskOp, TaskOpError, WithdrawalError};
pub use policy::{PolicyDecision, RequiredAction, evaluate};
pub use wallet::VendorWallet;

/// Who cancelled a task after acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelActor {
    Vendor(VendorId),
    Admin,
}

/// Admin decision on a pending withdrawal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalDecision {
    Approve,
    Decline,
}

/// Vendor-reported cash collection details.
///
/// `confirmed` reflects the upstream two-step confirmation; the engine
/// trusts it and never re-derives it. The photo is audit metadata only.
#[derive(Debug, Clone, Default)]
pub struct CashCollection {
    pub confirmed: bool,
    /// Overrides the configured GST rate for this bill, in basis points.
    pub gst_bp: Option<u32>,
    pub cash_photo: Option<String>,
}

/// Outcome of a decline: either it happened now, or the task was already
/// terminal and the call was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineOutcome {
    Declined { penalty: EntryId },
    AlreadyDeclined,
}

/// A command representing the possible inputs of the engine.
#[derive(Debug, Clone)]
pub enum Command {
    /// External intake creates a task ahead of assignment.
    CreateTask {
        task: TaskId,
        flavor: TaskFlavor,
        customer: String,
        billing_amount: Amount,
    },
    /// Admin or auto-assignment hands the task to a vendor.
    Assign { task: TaskId, vendor: VendorId },
    Accept { task: TaskId, vendor: VendorId },
    /// Vendor decline or SLA-timeout auto-decline; treated identically.
    Decline {
        task: TaskId,
        vendor: VendorId,
        reason: String,
    },
    Start { task: TaskId, vendor: VendorId },
    /// Completion with an externally verified online payment.
    Complete {
        task: TaskId,
        vendor: VendorId,
        payment_ref: Option<String>,
    },
    CollectCash {
        task: TaskId,
        vendor: VendorId,
        collection: CashCollection,
    },
    Cancel {
        task: TaskId,
        by: CancelActor,
        reason: String,
    },
    /// Externally verified payment into the wallet.
    RecordDeposit {
        vendor: VendorId,
        amount: Amount,
        reference: Option<String>,
    },
    /// Admin-issued signed correction.
    ManualAdjustment {
        vendor: VendorId,
        amount: Amount,
        note: String,
    },
    RequestWithdrawal { vendor: VendorId, amount: Amount },
    ResolveWithdrawal {
        request: WithdrawalId,
        decision: WithdrawalDecision,
        note: Option<String>,
    },
    /// Spawn a fresh assignment of a declined task to a different vendor.
    Reassign { task: TaskId, vendor: VendorId },
}

/// The wallet and task-assignment engine.
pub struct Engine {
    config: Config,
    wallets: HashMap<VendorId, VendorWallet>,
    tasks: HashMap<TaskId, Task>,
    withdrawals: HashMap<WithdrawalId, WithdrawalRequest>,
    next_entry: EntryId,
    next_withdrawal: WithdrawalId,
    next_task: TaskId,
    events: Vec<Event>,
}

/// Public API
impl Engine {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            wallets: HashMap::new(),
            tasks: HashMap::new(),
            withdrawals: HashMap::new(),
            next_entry: 1,
            next_withdrawal: 1,
            next_task: 1,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the engine over a stream of commands.
    pub async fn run(&mut self, mut stream: impl Stream<Item = Command> + Unpin) {
        while let Some(command) = stream.next().await {
            // failed commands must not stop the stream
            let _ = self.apply(command);
        }
    }

    /// Apply a single command on top of the current engine state.
    pub fn apply(&mut self, command: Command) -> Result<(), EngineError> {
        match command {
            Command::CreateTask {
                task,
                flavor,
                customer,
                billing_amount,
            } => {
                let result = self.create_task(task, flavor, customer, billing_amount);
                Self::log_result("create", None, Some(task), Some(billing_amount), &result);
                result?;
            }
            Command::Assign { task, vendor } => {
                let result = self.assign_task(task, vendor);
                Self::log_result("assign", Some(vendor), Some(task), None, &result);
                result?;
            }
            Command::Accept { task, vendor } => {
                let result = self.accept_task(task, vendor);
                Self::log_result("accept", Some(vendor), Some(task), None, &result);
                result?;
            }
            Command::Decline {
                task,
                vendor,
                reason,
            } => {
                let result = self.decline_task(task, vendor, &reason);
                Self::log_result("decline", Some(vendor), Some(task), None, &result);
                result?;
            }
            Command::Start { task, vendor } => {
                let result = self.start_task(task, vendor);
                Self::log_result("start", Some(vendor), Some(task), None, &result);
                result?;
            }
            Command::Complete {
                task,
                vendor,
                payment_ref,
            } => {
                let result = self.complete_task(task, vendor, payment_ref.as_deref());
                Self::log_result("complete", Some(vendor), Some(task), None, &result);
                result?;
            }
            Command::CollectCash {
                task,
                vendor,
                collection,
            } => {
                let result = self.collect_cash(task, vendor, collection);
                Self::log_result("collect_cash", Some(vendor), Some(task), None, &result);
                result?;
            }
            Command::Cancel { task, by, reason } => {
                let vendor = match by {
                    CancelActor::Vendor(v) => Some(v),
                    CancelActor::Admin => None,
                };
                let result = self.cancel_task(task, by, &reason);
                Self::log_result("cancel", vendor, Some(task), None, &result);
                result?;
            }
            Command::RecordDeposit {
                vendor,
                amount,
                reference,
            } => {
                let result = self.record_deposit(vendor, amount, reference.as_deref());
                Self::log_result("deposit", Some(vendor), None, Some(amount), &result);
                result?;
            }
            Command::ManualAdjustment {
                vendor,
                amount,
                note,
            } => {
                let result = self.manual_adjustment(vendor, amount, &note);
                Self::log_result("adjust", Some(vendor), None, Some(amount), &result);
                result?;
            }
            Command::RequestWithdrawal { vendor, amount } => {
                let result = self.request_withdrawal(vendor, amount);
                Self::log_result("withdraw_request", Some(vendor), None, Some(amount), &result);
                result?;
            }
            Command::ResolveWithdrawal {
                request,
                decision,
                note,
            } => {
                let result = self.resolve_withdrawal(request, decision, note);
                Self::log_result("withdraw_resolve", None, None, None, &result);
                result?;
            }
            Command::Reassign { task, vendor } => {
                let result = self.reassign_declined(task, vendor);
                Self::log_result("reassign", Some(vendor), Some(task), None, &result);
                result?;
            }
        }
        Ok(())
    }

    pub fn wallet(&self, vendor: VendorId) -> Option<&VendorWallet> {
        self.wallets.get(&vendor)
    }

    pub fn wallets(&self) -> impl Iterator<Item = &VendorWallet> + '_ {
        self.wallets.values()
    }

    pub fn task(&self, task: TaskId) -> Option<&Task> {
        self.tasks.get(&task)
    }

    pub fn withdrawal(&self, request: WithdrawalId) -> Option<&WithdrawalRequest> {
        self.withdrawals.get(&request)
    }

    /// Take all events emitted since the last drain. The engine never
    /// depends on anyone consuming these.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Register a task arriving from booking/ticket intake.
    pub fn create_task(
        &mut self,
        task: TaskId,
        flavor: TaskFlavor,
        customer: String,
        billing_amount: Amount,
    ) -> Result<(), EngineError> {
        if self.tasks.contains_key(&task) {
            return Err(TaskOpError::DuplicateTask(TaskOp::Create, task).into());
        }
        self.tasks
            .insert(task, Task::new(task, flavor, customer, billing_amount));
        // saturates at the id ceiling instead of wrapping the counter
        self.next_task = self.next_task.max(task.saturating_add(1));
        Ok(())
    }

    /// Hand an unassigned task to a vendor. Stamps the vendor's first-ever
    /// assignment, which starts the mandatory-deposit clock.
    pub fn assign_task(&mut self, task: TaskId, vendor: VendorId) -> Result<(), EngineError> {
        let t = self
            .tasks
            .get_mut(&task)
            .ok_or(TaskOpError::TaskNotFound(TaskOp::Assign, task))?;
        if t.state != TaskState::Unassigned {
            return Err(TaskOpError::InvalidTransition(TaskOp::Assign, task, t.state).into());
        }

        t.vendor = Some(vendor);
        t.state = TaskState::Assigned;
        t.assigned_at = Some(Utc::now());

        self.wallets
            .entry(vendor)
            .or_insert_with(|| VendorWallet::new(vendor))
            .record_first_assignment(Utc::now());

        self.events.push(Event::TaskAssigned { task, vendor });
        Ok(())
    }

    /// Vendor accepts an assigned task, subject to the deposit policy.
    pub fn accept_task(&mut self, task: TaskId, vendor: VendorId) -> Result<(), EngineError> {
        let state = self.expect_assigned(TaskOp::Accept, task, vendor)?;
        if state != TaskState::Assigned {
            return Err(TaskOpError::InvalidTransition(TaskOp::Accept, task, state).into());
        }

        let wallet = self
            .wallets
            .entry(vendor)
            .or_insert_with(|| VendorWallet::new(vendor));
        if !policy::evaluate(wallet).can_accept_tasks {
            // Task stays Assigned; caller routes the vendor to the deposit
            // flow, not a generic top-up.
            return Err(EngineError::MandatoryDepositRequired(vendor));
        }

        let fee = self.config.acceptance_fee();
        if !fee.is_zero() {
            let id = self.next_entry_id();
            let wallet = self.wallets.get_mut(&vendor).expect("wallet exists");
            // unguarded: the fee may overdraw
            wallet.post(
                id,
                EntryKind::TaskAcceptanceFee,
                -fee,
                format!("Acceptance fee for task {task}"),
                Some(task as u64),
            )?;
        }

        let t = self.tasks.get_mut(&task).expect("task exists");
        t.state = TaskState::Accepted;
        t.vendor_response = VendorResponse::Accepted;

        self.events.push(Event::TaskAccepted { task, vendor });
        Ok(())
    }

    /// Vendor declines an assigned task (or the SLA timeout does it for
    /// them). The decline is authoritative; the penalty is a side effect
    /// that can never block it. Declining an already-declined task is a
    /// no-op reporting the terminal state.
    pub fn decline_task(
        &mut self,
        task: TaskId,
        vendor: VendorId,
        reason: &str,
    ) -> Result<DeclineOutcome, EngineError> {
        let state = self.expect_assigned(TaskOp::Decline, task, vendor)?;
        match state {
            TaskState::Declined => return Ok(DeclineOutcome::AlreadyDeclined),
            TaskState::Assigned => {}
            other => {
                return Err(TaskOpError::InvalidTransition(TaskOp::Decline, task, other).into());
            }
        }

        // Transition first: the decline stands regardless of billing.
        let t = self.tasks.get_mut(&task).expect("task exists");
        t.state = TaskState::Declined;
        t.vendor_response = VendorResponse::Declined;

        let penalty = self.config.decline_penalty();
        let id = self.next_entry_id();
        let wallet = self
            .wallets
            .entry(vendor)
            .or_insert_with(|| VendorWallet::new(vendor));
        if wallet.balance() < penalty {
            warn!(
                vendor,
                balance = %wallet.balance(),
                penalty = %penalty,
                "decline penalty will overdraw wallet"
            );
        }
        let entry = wallet
            .post(
                id,
                EntryKind::Penalty,
                -penalty,
                format!("Decline penalty for task {task}: {reason}"),
                Some(task as u64),
            )
            .expect("penalty posting is unguarded");
        let penalty_entry = entry.id;

        self.events.push(Event::TaskDeclined {
            task,
            vendor,
            penalty: Some(penalty_entry),
        });
        Ok(DeclineOutcome::Declined {
            penalty: penalty_entry,
        })
    }

    /// Vendor begins work on an accepted task.
    pub fn start_task(&mut self, task: TaskId, vendor: VendorId) -> Result<(), EngineError> {
        let state = self.expect_assigned(TaskOp::Start, task, vendor)?;
        if state != TaskState::Accepted {
            return Err(TaskOpError::InvalidTransition(TaskOp::Start, task, state).into());
        }
        self.tasks.get_mut(&task).expect("task exists").state = TaskState::InProgress;
        Ok(())
    }

    /// Complete a task paid online (payment verified externally). Credits
    /// the vendor's service share: billing minus the platform commission.
    pub fn complete_task(
        &mut self,
        task: TaskId,
        vendor: VendorId,
        payment_ref: Option<&str>,
    ) -> Result<(), EngineError> {
        let state = self.expect_assigned(TaskOp::Complete, task, vendor)?;
        if state != TaskState::InProgress {
            return Err(TaskOpError::InvalidTransition(TaskOp::Complete, task, state).into());
        }

        let billing = self.tasks[&task].billing_amount;
        let earning = billing - billing.mul_rate_bp(self.config.commission_bp);
        let description = match payment_ref {
            Some(r) => format!("Service earning for task {task} (payment {r})"),
            None => format!("Service earning for task {task}"),
        };
        let id = self.next_entry_id();
        self.wallets
            .get_mut(&vendor)
            .expect("assigned vendor has a wallet")
            .post(id, EntryKind::Earning, earning, description, Some(task as u64))?;

        self.tasks.get_mut(&task).expect("task exists").state = TaskState::Completed;
        self.events.push(Event::TaskCompleted { task, vendor });
        Ok(())
    }

    /// Reconcile vendor-reported cash collection and complete the task.
    ///
    /// The vendor keeps the collected cash in hand; only the platform's
    /// commission on the GST-inclusive total is deducted from the wallet.
    /// Fails without side effects if the wallet cannot cover the deduction.
    pub fn collect_cash(
        &mut self,
        task: TaskId,
        vendor: VendorId,
        collection: CashCollection,
    ) -> Result<(), EngineError> {
        let state = self.expect_assigned(TaskOp::CollectCash, task, vendor)?;
        if state != TaskState::InProgress {
            return Err(TaskOpError::InvalidTransition(TaskOp::CollectCash, task, state).into());
        }
        if !collection.confirmed {
            return Err(EngineError::CashNotConfirmed(task));
        }

        let billing = self.tasks[&task].billing_amount;
        let gst_bp = collection.gst_bp.unwrap_or(self.config.gst_bp);
        let collected = billing.with_tax_bp(gst_bp);
        let deducted = collected.mul_rate_bp(self.config.commission_bp);

        let id = self.next_entry_id();
        self.wallets
            .get_mut(&vendor)
            .expect("assigned vendor has a wallet")
            .post(
                id,
                EntryKind::CashCollectionDeduction,
                -deducted,
                format!("Commission on cash collected for task {task}"),
                Some(task as u64),
            )?;

        let t = self.tasks.get_mut(&task).expect("task exists");
        t.state = TaskState::Completed;
        t.cash_photo = collection.cash_photo;

        self.events.push(Event::CashCollected {
            task,
            vendor,
            collected,
            deducted,
        });
        self.events.push(Event::TaskCompleted { task, vendor });
        Ok(())
    }

    /// Cancel a task after acceptance. Vendor-initiated cancellations carry
    /// a penalty; admin cancellations do not.
    pub fn cancel_task(
        &mut self,
        task: TaskId,
        by: CancelActor,
        reason: &str,
    ) -> Result<(), EngineError> {
        let t = self
            .tasks
            .get(&task)
            .ok_or(TaskOpError::TaskNotFound(TaskOp::Cancel, task))?;
        let assigned = t
            .vendor
            .ok_or(TaskOpError::NotAssigned(TaskOp::Cancel, task))?;
        if let CancelActor::Vendor(v) = by {
            if v != assigned {
                return Err(TaskOpError::VendorMismatch(TaskOp::Cancel, task, assigned, v).into());
            }
        }
        if !matches!(t.state, TaskState::Accepted | TaskState::InProgress) {
            return Err(TaskOpError::InvalidTransition(TaskOp::Cancel, task, t.state).into());
        }

        self.tasks.get_mut(&task).expect("task exists").state = TaskState::Cancelled;

        let penalty_entry = match by {
            CancelActor::Vendor(_) if !self.config.cancellation_penalty().is_zero() => {
                let penalty = self.config.cancellation_penalty();
                let id = self.next_entry_id();
                let entry = self
                    .wallets
                    .get_mut(&assigned)
                    .expect("assigned vendor has a wallet")
                    .post(
                        id,
                        EntryKind::Penalty,
                        -penalty,
                        format!("Cancellation penalty for task {task}: {reason}"),
                        Some(task as u64),
                    )
                    .expect("penalty posting is unguarded");
                Some(entry.id)
            }
            _ => None,
        };

        self.events.push(Event::TaskCancelled {
            task,
            vendor: assigned,
            penalty: penalty_entry,
        });
        Ok(())
    }

    /// Spawn a fresh assignment of a declined task for a different vendor.
    /// The declined instance stays terminal; the new task gets a new id.
    pub fn reassign_declined(
        &mut self,
        task: TaskId,
        vendor: VendorId,
    ) -> Result<TaskId, EngineError> {
        let t = self
            .tasks
            .get(&task)
            .ok_or(TaskOpError::TaskNotFound(TaskOp::Reassign, task))?;
        if t.state != TaskState::Declined {
            return Err(TaskOpError::InvalidTransition(TaskOp::Reassign, task, t.state).into());
        }
        if t.vendor == Some(vendor) {
            return Err(TaskOpError::SameVendor(TaskOp::Reassign, task, vendor).into());
        }

        let (flavor, customer, billing_amount) = (t.flavor, t.customer.clone(), t.billing_amount);
        let new_id = self.mint_task_id();
        let fresh = Task::new(new_id, flavor, customer, billing_amount);
        self.tasks.insert(new_id, fresh);
        self.assign_task(new_id, vendor)?;
        Ok(new_id)
    }

    /// Record an externally verified deposit and re-evaluate the mandatory
    /// deposit latch.
    pub fn record_deposit(
        &mut self,
        vendor: VendorId,
        amount: Amount,
        reference: Option<&str>,
    ) -> Result<(), EngineError> {
        if amount.is_negative() || amount.is_zero() {
            return Err(LedgerError::NonPositiveAmount(amount).into());
        }

        let description = match reference {
            Some(r) => format!("Wallet deposit (payment {r})"),
            None => "Wallet deposit".to_string(),
        };
        let id = self.next_entry_id();
        let wallet = self
            .wallets
            .entry(vendor)
            .or_insert_with(|| VendorWallet::new(vendor));
        wallet.post(id, EntryKind::Deposit, amount, description, None)?;
        wallet.latch_initial_deposit();

        let satisfied = policy::deposit_satisfied(wallet, &self.config);
        if satisfied {
            wallet.latch_mandatory_deposit(self.config.mandatory_deposit());
        }

        self.events.push(Event::DepositRecorded { vendor, amount });
        if satisfied {
            self.events.push(Event::MandatoryDepositSatisfied { vendor });
        }
        Ok(())
    }

    /// Post an admin-issued signed correction. Distinct from automatic
    /// penalties; used for adjudicated fraud and similar cases.
    pub fn manual_adjustment(
        &mut self,
        vendor: VendorId,
        amount: Amount,
        note: &str,
    ) -> Result<(), EngineError> {
        let id = self.next_entry_id();
        self.wallets
            .entry(vendor)
            .or_insert_with(|| VendorWallet::new(vendor))
            .post(
                id,
                EntryKind::ManualAdjustment,
                amount,
                format!("Manual adjustment: {note}"),
                None,
            )?;
        Ok(())
    }

    /// Open a payout request against the withdrawable balance.
    pub fn request_withdrawal(
        &mut self,
        vendor: VendorId,
        amount: Amount,
    ) -> Result<WithdrawalId, EngineError> {
        if amount.is_negative() || amount.is_zero() {
            return Err(LedgerError::NonPositiveAmount(amount).into());
        }

        let withdrawable = self
            .wallets
            .get(&vendor)
            .map(|w| w.withdrawable())
            .unwrap_or(Amount::ZERO);
        if amount > withdrawable {
            return Err(WithdrawalError::InsufficientFunds {
                vendor,
                withdrawable,
                requested: amount,
            }
            .into());
        }

        let id = self.next_withdrawal;
        self.next_withdrawal += 1;
        self.withdrawals.insert(
            id,
            WithdrawalRequest {
                id,
                vendor,
                amount,
                status: WithdrawalStatus::Pending,
                requested_at: Utc::now(),
                resolved_at: None,
                admin_note: None,
            },
        );
        self.events.push(Event::WithdrawalRequested {
            request: id,
            vendor,
            amount,
        });
        Ok(id)
    }

    /// Resolve a pending withdrawal. The first resolution wins: approval
    /// posts exactly one ledger debit, and re-resolving reports the
    /// standing resolution instead of reapplying it.
    pub fn resolve_withdrawal(
        &mut self,
        request: WithdrawalId,
        decision: WithdrawalDecision,
        note: Option<String>,
    ) -> Result<(), EngineError> {
        let (vendor, amount) = {
            let r = self
                .withdrawals
                .get(&request)
                .ok_or(WithdrawalError::NotFound(request))?;
            if r.status != WithdrawalStatus::Pending {
                return Err(WithdrawalError::AlreadyResolved(request, r.status).into());
            }
            (r.vendor, r.amount)
        };

        let status = match decision {
            WithdrawalDecision::Approve => {
                // The posting is the gate: if the balance has since drained,
                // the request stays pending and the admin sees the shortfall.
                let id = self.next_entry_id();
                self.wallets
                    .get_mut(&vendor)
                    .expect("request vendor has a wallet")
                    .post(
                        id,
                        EntryKind::Withdrawal,
                        -amount,
                        format!("Withdrawal payout (request {request})"),
                        Some(request),
                    )?;
                WithdrawalStatus::Approved
            }
            WithdrawalDecision::Decline => WithdrawalStatus::Declined,
        };

        let r = self
            .withdrawals
            .get_mut(&request)
            .expect("request still present");
        r.status = status;
        r.resolved_at = Some(Utc::now());
        r.admin_note = note;

        self.events.push(Event::WithdrawalResolved {
            request,
            vendor,
            status,
        });
        Ok(())
    }
}

/// Private API
impl Engine {
    fn next_entry_id(&mut self) -> EntryId {
        let id = self.next_entry;
        self.next_entry += 1;
        id
    }

    /// Mint a task id that is not in use. Caller-chosen ids share the same
    /// space, so skip past any the intake already claimed.
    fn mint_task_id(&mut self) -> TaskId {
        let mut id = self.next_task;
        while self.tasks.contains_key(&id) {
            id = id.wrapping_add(1);
        }
        self.next_task = id.wrapping_add(1);
        id
    }

    /// Look up a task and verify it is assigned to `vendor`; returns the
    /// current state for the caller's own transition check.
    fn expect_assigned(
        &self,
        op: TaskOp,
        task: TaskId,
        vendor: VendorId,
    ) -> Result<TaskState, TaskOpError> {
        let t = self
            .tasks
            .get(&task)
            .ok_or(TaskOpError::TaskNotFound(op, task))?;
        let assigned = t.vendor.ok_or(TaskOpError::NotAssigned(op, task))?;
        if assigned != vendor {
            return Err(TaskOpError::VendorMismatch(op, task, assigned, vendor));
        }
        Ok(t.state)
    }

    /// Small helper to log `apply` results
    fn log_result<T, E: std::fmt::Display>(
        op: &str,
        vendor: Option<VendorId>,
        task: Option<TaskId>,
        amount: Option<Amount>,
        result: &Result<T, E>,
    ) {
        let vendor = vendor.map(|v| v.to_string()).unwrap_or_default();
        let task = task.map(|t| t.to_string()).unwrap_or_default();
        let amount = amount.map(|a| a.to_string()).unwrap_or_default();
        match result {
            Ok(_) => {
                info!(%vendor, %task, %amount, "{op} applied");
            }
            Err(e) => {
                info!(%vendor, %task, %amount, reason = %e, "{op} skipped");
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
