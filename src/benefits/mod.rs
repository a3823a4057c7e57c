//! Benefit engines: eligibility, periodic pension, withdrawal settlement,
//! early-retirement reduction

mod eligibility;
mod pension;
mod preview;
mod reduction;
mod withdrawal;

pub use eligibility::{classify, BenefitClassification};
pub use pension::{BenefitCalculator, PensionCalculationResult};
pub use preview::{flat_reduction_estimate, simple_interest_estimate};
pub use reduction::reduction_factor;
pub use withdrawal::{compute_withdrawal, WithdrawalSettlementResult};
