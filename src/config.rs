//! Business parameters observed to vary across deployments.
//!
//! Thresholds and rates are configuration, never hardcoded at call sites;
//! deployments load them from whatever format wraps [`Config`] (the crate
//! only requires serde).

use serde::Deserialize;

use crate::Amount;

/// Tunable business parameters for the wallet and task engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Balance a vendor must reach (via deposits) before accepting tasks
    /// once their first assignment has landed. Paise.
    pub mandatory_deposit_paise: i64,
    /// Fixed penalty for declining an assigned task. Paise.
    pub decline_penalty_paise: i64,
    /// Penalty for a vendor cancelling after acceptance. Kept separate from
    /// the decline penalty; defaults to the same value.
    pub cancellation_penalty_paise: i64,
    /// Optional fee charged on task acceptance. Zero disables it.
    pub acceptance_fee_paise: i64,
    /// Platform commission on collected cash, in basis points.
    pub commission_bp: u32,
    /// Default GST rate applied to billing, in basis points.
    pub gst_bp: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mandatory_deposit_paise: 200_000, // 2000.00
            decline_penalty_paise: 10_000,    // 100.00
            cancellation_penalty_paise: 10_000,
            acceptance_fee_paise: 0,
            commission_bp: 1000, // 10%
            gst_bp: 1800,        // 18%
        }
    }
}

impl Config {
    pub fn mandatory_deposit(&self) -> Amount {
        Amount::from_paise(self.mandatory_deposit_paise)
    }

    pub fn decline_penalty(&self) -> Amount {
        Amount::from_paise(self.decline_penalty_paise)
    }

    pub fn cancellation_penalty(&self) -> Amount {
        Amount::from_paise(self.cancellation_penalty_paise)
    }

    pub fn acceptance_fee(&self) -> Amount {
        Amount::from_paise(self.acceptance_fee_paise)
    }
}
