//! Legacy quick-estimate formulas
//!
//! The original eligibility screen shipped a simpler formula set than the
//! full calculator: a flat 5% per year early-retirement reduction and a
//! non-compounded 8% per service year interest figure. They survive here as
//! clearly-named estimates for preview display; the engines in the sibling
//! modules are authoritative.

/// Flat per-year reduction used by the quick estimate
const FLAT_REDUCTION_PER_YEAR: f64 = 0.05;

/// Simple per-year interest used by the quick estimate
const SIMPLE_INTEREST_PER_YEAR: f64 = 0.08;

/// Rough early-retirement reduction: 5% for each whole or partial year
/// short of normal retirement age
pub fn flat_reduction_estimate(age_at_separation: f64, normal_retirement_age: u32) -> f64 {
    let years_short = (normal_retirement_age as f64 - age_at_separation).max(0.0);
    years_short * FLAT_REDUCTION_PER_YEAR
}

/// Rough settlement value: contributions grown by simple (non-compounded)
/// interest over the service period
pub fn simple_interest_estimate(own_contributions: f64, years_of_service: f64) -> f64 {
    own_contributions * (1.0 + SIMPLE_INTEREST_PER_YEAR * years_of_service.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_reduction() {
        assert_relative_eq!(flat_reduction_estimate(60.0, 65), 0.25);
        assert_relative_eq!(flat_reduction_estimate(65.0, 65), 0.0);
        // Past NRA the estimate floors at zero
        assert_relative_eq!(flat_reduction_estimate(67.0, 65), 0.0);
    }

    #[test]
    fn test_simple_interest_undershoots_compound() {
        use crate::benefits::compute_withdrawal;
        use crate::rules::WithdrawalTerms;

        let estimate = simple_interest_estimate(10_000.0, 10.0);
        assert_relative_eq!(estimate, 18_000.0);

        // The estimate ignores the service bonus, so the authoritative
        // settlement comes out higher at 10 years
        let settlement = compute_withdrawal(10_000.0, 10.0, &WithdrawalTerms::default());
        assert!(settlement.total > estimate);
    }
}
