//! Deposit policy: when a vendor may accept work.
//!
//! A brand-new vendor accepts freely until their first-ever assignment
//! lands. From then on acceptance is gated until the mandatory deposit
//! latches, which happens once a deposit brings the balance to the
//! configured threshold. The latch is permanent; later depletion never
//! re-blocks the vendor.

use super::wallet::VendorWallet;
use crate::config::Config;

/// Why a vendor is currently blocked from accepting tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredAction {
    MandatoryDeposit,
}

/// Outcome of evaluating the deposit policy for a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDecision {
    pub can_accept_tasks: bool,
    pub required_action: Option<RequiredAction>,
}

/// Evaluate whether the vendor may accept tasks right now.
pub fn evaluate(wallet: &VendorWallet) -> PolicyDecision {
    let blocked = wallet.first_task_assigned_at().is_some() && !wallet.has_mandatory_deposit();
    PolicyDecision {
        can_accept_tasks: !blocked,
        required_action: blocked.then_some(RequiredAction::MandatoryDeposit),
    }
}

/// Whether the wallet balance now satisfies the mandatory deposit
/// threshold. Checked after each deposit posting; latching is the engine's
/// job.
pub fn deposit_satisfied(wallet: &VendorWallet, config: &Config) -> bool {
    !wallet.has_mandatory_deposit() && wallet.balance() >= config.mandatory_deposit()
}
