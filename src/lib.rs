//! Pension System - benefit calculation engine for a UN-style defined-benefit scheme
//!
//! This library provides:
//! - Service duration arithmetic in the fund's reckoning (calendar borrow,
//!   fixed 30-day rollover)
//! - Mandatory/normal/early retirement date derivation
//! - Benefit eligibility classification at separation
//! - Tiered rate-of-accumulation and periodic pension amounts
//! - Withdrawal settlements (compound interest plus service bonus)
//! - Early-retirement reduction factors and scenario sweeps

pub mod benefits;
pub mod dates;
pub mod member;
pub mod rules;
pub mod scenario;

// Re-export commonly used types
pub use benefits::{
    BenefitCalculator, BenefitClassification, PensionCalculationResult,
    WithdrawalSettlementResult,
};
pub use dates::{CalendarDate, RetirementDates, ServiceDuration};
pub use member::MemberProfile;
pub use rules::{AgeThresholds, PlanRules};
pub use scenario::{BenefitStatement, ScenarioRunner};
