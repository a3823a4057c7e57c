//! Benefit eligibility classification at separation

use serde::{Deserialize, Serialize};

use crate::rules::AgeThresholds;

/// Benefit category a member separates into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BenefitClassification {
    /// Under five years of service: only a withdrawal settlement is payable
    WithdrawalSettlementOnly,
    /// Separation at or after normal retirement age (Article 28)
    NormalRetirement,
    /// Separation at or after early retirement age (Article 29)
    EarlyRetirement,
    /// Vested but below early retirement age (Article 30)
    DeferredRetirement,
}

impl BenefitClassification {
    /// Display label matching the statement wording
    pub fn as_str(&self) -> &'static str {
        match self {
            BenefitClassification::WithdrawalSettlementOnly => "Withdrawal Settlement Only",
            BenefitClassification::NormalRetirement => "Normal Retirement (Art. 28)",
            BenefitClassification::EarlyRetirement => "Early Retirement (Art. 29)",
            BenefitClassification::DeferredRetirement => "Deferred Retirement (Art. 30)",
        }
    }

    /// Whether any periodic benefit is payable at all
    pub fn has_periodic_benefit(&self) -> bool {
        !matches!(self, BenefitClassification::WithdrawalSettlementOnly)
    }
}

/// Classify a separation; first match wins, every input pair is classified
pub fn classify(
    years_of_service: f64,
    age_at_separation: f64,
    thresholds: AgeThresholds,
) -> BenefitClassification {
    if years_of_service < 5.0 {
        BenefitClassification::WithdrawalSettlementOnly
    } else if age_at_separation >= thresholds.normal as f64 {
        BenefitClassification::NormalRetirement
    } else if age_at_separation >= thresholds.early as f64 {
        BenefitClassification::EarlyRetirement
    } else {
        BenefitClassification::DeferredRetirement
    }
}
