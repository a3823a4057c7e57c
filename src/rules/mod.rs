//! Scheme rules: age thresholds, accrual schedule, settlement and reduction terms
//!
//! Every constant the benefit engines use lives here, in one place. The
//! legacy screens each carried their own copies of these numbers; this
//! container is the single source of truth.

mod accrual;
mod terms;
mod thresholds;

pub use accrual::AccrualSchedule;
pub use terms::{ReductionTerms, WithdrawalTerms};
pub use thresholds::AgeThresholds;

use serde::{Deserialize, Serialize};

/// Container for all plan rules used by the benefit engines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRules {
    pub accrual: AccrualSchedule,
    pub withdrawal: WithdrawalTerms,
    pub reduction: ReductionTerms,

    /// Flat cost-of-living adjustment applied to the periodic benefit
    pub cola_rate: f64,

    /// Ceiling on the lump-sum commutation percentage
    pub max_commutation_pct: f64,
}

impl PlanRules {
    /// The scheme's current published rules
    pub fn current() -> Self {
        Self {
            accrual: AccrualSchedule::default(),
            withdrawal: WithdrawalTerms::default(),
            reduction: ReductionTerms::default(),
            cola_rate: 0.028,
            max_commutation_pct: 33.33,
        }
    }
}

impl Default for PlanRules {
    fn default() -> Self {
        Self::current()
    }
}
