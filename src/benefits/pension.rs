//! Periodic pension engine: accrual, early reduction, commutation, COLA

use serde::{Deserialize, Serialize};

use super::eligibility::{classify, BenefitClassification};
use super::reduction::reduction_factor;
use super::withdrawal::{compute_withdrawal, WithdrawalSettlementResult};
use crate::member::MemberProfile;
use crate::rules::PlanRules;

/// Computed pension amounts for one member at one separation date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PensionCalculationResult {
    /// Unreduced annual pension: FAR x rate of accumulation
    pub annual_pension: f64,

    /// Monthly pension before commutation, after any early reduction
    pub monthly_pension: f64,

    /// Lump sum payable on commutation (0 when not elected)
    pub lump_sum: f64,

    /// Monthly pension after the commuted portion is deducted
    pub reduced_monthly_pension: f64,

    /// Payable monthly amount after the cost-of-living adjustment
    pub cola_adjusted_pension: f64,

    /// COLA-adjusted amount less the ASHI contribution (not clamped at 0)
    pub final_periodic_benefit: f64,

    /// Benefit category at separation
    pub eligibility: BenefitClassification,

    /// Early-retirement reduction applied, in percent
    pub early_retirement_reduction: f64,
}

/// Calculation engine bound to a set of plan rules
///
/// Every method is pure: identical inputs produce identical outputs, and
/// incomplete input degrades to zero-valued amounts rather than errors.
#[derive(Debug, Clone)]
pub struct BenefitCalculator {
    rules: PlanRules,
}

impl BenefitCalculator {
    pub fn new(rules: PlanRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PlanRules {
        &self.rules
    }

    /// Compute the full periodic-pension result for a member
    pub fn calculate_pension(&self, profile: &MemberProfile) -> PensionCalculationResult {
        let years_of_service = profile.service_duration().years_as_float();
        let age_at_separation = profile.age_at_separation();
        let thresholds = profile.age_thresholds();

        let eligibility = classify(years_of_service, age_at_separation, thresholds);

        let far = profile.final_average_remuneration();
        let roa = self.rules.accrual.rate_of_accumulation(years_of_service);
        let annual_pension = far * roa / 100.0;

        let reduction = if eligibility == BenefitClassification::EarlyRetirement {
            reduction_factor(
                age_at_separation,
                years_of_service,
                thresholds,
                &self.rules.reduction,
            )
        } else {
            0.0
        };

        let reduced_annual = annual_pension * (1.0 - reduction);
        let monthly_pension = reduced_annual / 12.0;

        let commutes = profile.lump_sum_elected
            && eligibility != BenefitClassification::DeferredRetirement;
        let (lump_sum, reduced_monthly_pension) = if commutes {
            let pct =
                profile.lump_sum_percentage.clamp(0.0, self.rules.max_commutation_pct) / 100.0;
            // The lump sum commutes the unreduced annual pension; the
            // monthly stream takes the early reduction first.
            let lump_sum = annual_pension * pct * profile.actuarial_factor;
            let commuted_monthly = monthly_pension * pct;
            (lump_sum, monthly_pension - commuted_monthly)
        } else {
            (0.0, monthly_pension)
        };

        let cola_adjusted_pension = reduced_monthly_pension * (1.0 + self.rules.cola_rate);
        let final_periodic_benefit = cola_adjusted_pension - profile.ashi_contribution;

        PensionCalculationResult {
            annual_pension,
            monthly_pension,
            lump_sum,
            reduced_monthly_pension,
            cola_adjusted_pension,
            final_periodic_benefit,
            eligibility,
            early_retirement_reduction: reduction * 100.0,
        }
    }

    /// Compute the withdrawal settlement for a member
    pub fn calculate_withdrawal(&self, profile: &MemberProfile) -> WithdrawalSettlementResult {
        compute_withdrawal(
            profile.own_contributions,
            profile.service_duration().years_as_float(),
            &self.rules.withdrawal,
        )
    }
}

impl Default for BenefitCalculator {
    fn default() -> Self {
        Self::new(PlanRules::current())
    }
}
