//! Withdrawal settlement: own contributions with compound interest and a
//! service-based bonus

use serde::{Deserialize, Serialize};

use crate::rules::WithdrawalTerms;

/// Itemized withdrawal settlement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalSettlementResult {
    /// Member's own contributions
    pub own_contributions: f64,

    /// Compound interest credited over the service period
    pub interest: f64,

    /// Contributions plus interest
    pub base_amount: f64,

    /// Service bonus as a fraction of the base amount
    pub bonus_rate: f64,

    /// Bonus in currency terms
    pub bonus_amount: f64,

    /// Amount payable
    pub total: f64,
}

/// Compute a withdrawal settlement
pub fn compute_withdrawal(
    own_contributions: f64,
    years_of_service: f64,
    terms: &WithdrawalTerms,
) -> WithdrawalSettlementResult {
    let future_value =
        own_contributions * (1.0 + terms.annual_interest_rate).powf(years_of_service);
    let interest = future_value - own_contributions;
    let base_amount = own_contributions + interest;

    let bonus_rate = terms.bonus_rate(years_of_service);
    let bonus_amount = base_amount * bonus_rate;

    WithdrawalSettlementResult {
        own_contributions,
        interest,
        base_amount,
        bonus_rate,
        bonus_amount,
        total: base_amount * (1.0 + bonus_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ten_year_settlement() {
        // $10,000 over 10 years at 3.25% compound, 50% bonus
        let result = compute_withdrawal(10_000.0, 10.0, &WithdrawalTerms::default());

        assert_relative_eq!(result.interest, 3_768.94, epsilon = 1.0);
        assert_relative_eq!(result.base_amount, 13_768.94, epsilon = 1.0);
        assert_relative_eq!(result.bonus_rate, 0.5);
        assert_relative_eq!(result.bonus_amount, 6_884.47, epsilon = 1.0);
        assert_relative_eq!(result.total, 20_653.42, epsilon = 1.0);
    }

    #[test]
    fn test_no_bonus_under_five_years() {
        let result = compute_withdrawal(10_000.0, 4.0, &WithdrawalTerms::default());

        assert_eq!(result.bonus_rate, 0.0);
        assert_eq!(result.bonus_amount, 0.0);
        assert_relative_eq!(result.total, result.base_amount);
    }

    #[test]
    fn test_bonus_caps_at_double() {
        let at_15 = compute_withdrawal(10_000.0, 15.0, &WithdrawalTerms::default());
        assert_relative_eq!(at_15.total, at_15.base_amount * 2.0);

        let at_20 = compute_withdrawal(10_000.0, 20.0, &WithdrawalTerms::default());
        assert_relative_eq!(at_20.bonus_rate, 1.0);
    }

    #[test]
    fn test_zero_contributions() {
        let result = compute_withdrawal(0.0, 12.0, &WithdrawalTerms::default());
        assert_eq!(result.total, 0.0);
        assert_eq!(result.interest, 0.0);
    }

    #[test]
    fn test_idempotent() {
        let a = compute_withdrawal(123_456.78, 17.25, &WithdrawalTerms::default());
        let b = compute_withdrawal(123_456.78, 17.25, &WithdrawalTerms::default());
        assert_eq!(a, b);
    }
}
