//! Scenario runner for separation-date sweeps
//!
//! Binds a set of plan rules once, then evaluates a member's full benefit
//! picture at one or many candidate separation dates without re-deriving
//! anything between calls.

use serde::{Deserialize, Serialize};

use crate::benefits::{BenefitCalculator, PensionCalculationResult, WithdrawalSettlementResult};
use crate::dates::{CalendarDate, ServiceDuration};
use crate::member::MemberProfile;
use crate::rules::PlanRules;

/// Everything computed for one member at one separation date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitStatement {
    pub member_id: u32,
    /// Separation date the statement was evaluated at, `DD-MM-YYYY`
    pub separation_date: String,
    pub service: ServiceDuration,
    pub pension: PensionCalculationResult,
    pub withdrawal: WithdrawalSettlementResult,
    /// Derived retirement dates, blank when the date of birth is unparseable
    pub mandatory_separation_date: String,
    pub normal_retirement_date: String,
    pub early_retirement_date: String,
}

/// Pre-configured runner for evaluating benefit scenarios
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    calculator: BenefitCalculator,
}

impl ScenarioRunner {
    /// Runner on the scheme's current rules
    pub fn new() -> Self {
        Self {
            calculator: BenefitCalculator::default(),
        }
    }

    /// Runner with custom plan rules
    pub fn with_rules(rules: PlanRules) -> Self {
        Self {
            calculator: BenefitCalculator::new(rules),
        }
    }

    pub fn calculator(&self) -> &BenefitCalculator {
        &self.calculator
    }

    /// Evaluate a member's statement at the profile's own separation date
    pub fn run(&self, profile: &MemberProfile) -> BenefitStatement {
        let (mandatory, normal, early) = match profile.retirement_dates() {
            Some(dates) => (
                dates.mandatory.format_dmy(),
                dates.normal.format_dmy(),
                dates.early.format_dmy(),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        BenefitStatement {
            member_id: profile.member_id,
            separation_date: profile.date_of_separation.clone(),
            service: profile.service_duration(),
            pension: self.calculator.calculate_pension(profile),
            withdrawal: self.calculator.calculate_withdrawal(profile),
            mandatory_separation_date: mandatory,
            normal_retirement_date: normal,
            early_retirement_date: early,
        }
    }

    /// Evaluate statements for a batch of members
    pub fn run_batch(&self, profiles: &[MemberProfile]) -> Vec<BenefitStatement> {
        profiles.iter().map(|p| self.run(p)).collect()
    }

    /// Sweep candidate separation dates at month-end steps, inclusive of
    /// the months containing `from` and `to`
    ///
    /// Returns one statement per month-end, or an empty vector when either
    /// bound fails to parse.
    pub fn sweep_separation_dates(
        &self,
        profile: &MemberProfile,
        from: &str,
        to: &str,
    ) -> Vec<BenefitStatement> {
        let (start, end) = match (CalendarDate::parse(from), CalendarDate::parse(to)) {
            (Ok(a), Ok(b)) => (a, b),
            _ => return Vec::new(),
        };

        let mut statements = Vec::new();
        let (mut year, mut month) = (start.year(), start.month());
        let last = (end.year(), end.month());

        while (year, month) <= last {
            if let Some(month_end) = CalendarDate::month_end_of(year, month) {
                let mut candidate = profile.clone();
                candidate.date_of_separation = month_end.format_dmy();
                statements.push(self.run(&candidate));
            }

            if month == 12 {
                year += 1;
                month = 1;
            } else {
                month += 1;
            }
        }

        statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::FarInput;

    fn test_profile() -> MemberProfile {
        let mut profile = MemberProfile::new(42, "01-01-1965", "01-01-2000", "01-01-2025");
        profile.far = FarInput::Direct(120_000.0);
        profile.own_contributions = 200_000.0;
        profile
    }

    #[test]
    fn test_statement_includes_retirement_dates() {
        let statement = ScenarioRunner::new().run(&test_profile());

        // Entry 2000: NRA 62 / ERA 55; first-of-month birthday shifts back
        assert_eq!(statement.normal_retirement_date, "31-12-2026");
        assert_eq!(statement.early_retirement_date, "31-12-2019");
        assert_eq!(statement.mandatory_separation_date, "31-12-2029");
        assert_eq!(statement.service.years, 25);
    }

    #[test]
    fn test_blank_dates_for_unparseable_birth() {
        let mut profile = test_profile();
        profile.date_of_birth = String::new();

        let statement = ScenarioRunner::new().run(&profile);
        assert!(statement.normal_retirement_date.is_empty());
    }

    #[test]
    fn test_sweep_steps_by_month_end() {
        let runner = ScenarioRunner::new();
        let statements =
            runner.sweep_separation_dates(&test_profile(), "15-01-2025", "15-06-2025");

        assert_eq!(statements.len(), 6);
        assert_eq!(statements[0].separation_date, "31-01-2025");
        assert_eq!(statements[1].separation_date, "28-02-2025");
        assert_eq!(statements[5].separation_date, "30-06-2025");

        // Service never decreases as the separation date advances
        for pair in statements.windows(2) {
            assert!(
                pair[1].service.years_as_float() >= pair[0].service.years_as_float()
            );
        }
    }

    #[test]
    fn test_sweep_with_bad_bounds_is_empty() {
        let runner = ScenarioRunner::new();
        assert!(runner
            .sweep_separation_dates(&test_profile(), "garbage", "15-06-2025")
            .is_empty());
    }
}
