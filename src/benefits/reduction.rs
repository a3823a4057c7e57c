//! Early-retirement actuarial reduction

use crate::rules::{AgeThresholds, ReductionTerms};

/// Reduction applied to the pension of a member separating before normal
/// retirement age, as a fraction of the unreduced amount
///
/// Returns 0 at or above NRA (no reduction) and below ERA (the deferred
/// case carries no early-retirement reduction). Otherwise the first
/// `tiered_span_years` of the shortfall to NRA are charged at a rate tiered
/// on ERA and service length, and the remainder at the flat residual rate.
pub fn reduction_factor(
    age_at_separation: f64,
    years_of_service: f64,
    thresholds: AgeThresholds,
    terms: &ReductionTerms,
) -> f64 {
    let nra = thresholds.normal as f64;
    let era = thresholds.early as f64;

    if age_at_separation >= nra || age_at_separation < era {
        return 0.0;
    }

    let years_to_nra = nra - age_at_separation;
    let tier_rate = terms.tier_rate(thresholds.early, years_of_service);

    let tiered_years = years_to_nra.min(terms.tiered_span_years);
    let residual_years = (years_to_nra - terms.tiered_span_years).max(0.0);

    tiered_years * tier_rate + residual_years * terms.residual_rate
}
