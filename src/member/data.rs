//! Member profile matching the enrollment form fields
//!
//! Dates stay as the raw strings the member typed; everything derived from
//! them goes through the total string wrappers so incomplete input degrades
//! to zero-valued results instead of errors.

use serde::{Deserialize, Serialize};

use crate::dates::{
    service_between_strings, CalendarDate, RetirementDates, ServiceDuration,
};
use crate::rules::AgeThresholds;

/// Number of monthly remuneration slots backing the FAR average
pub const MONTHLY_REMUNERATION_SLOTS: usize = 36;

/// How final average remuneration is supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FarInput {
    /// Direct manual entry
    Direct(f64),

    /// 36 monthly remuneration slots, possibly sparse
    ///
    /// The average is only formed once every slot is populated; any gap
    /// resolves the FAR to 0, which the input screens read as "incomplete".
    Monthly(Vec<Option<f64>>),
}

impl FarInput {
    /// Build monthly slots from raw form strings; blank or non-numeric
    /// entries count as unpopulated
    pub fn monthly_from_strings<S: AsRef<str>>(slots: &[S]) -> Self {
        FarInput::Monthly(
            slots
                .iter()
                .map(|s| s.as_ref().trim().parse::<f64>().ok())
                .collect(),
        )
    }

    /// Resolve to a final average remuneration amount
    pub fn resolve(&self) -> f64 {
        match self {
            FarInput::Direct(value) => *value,
            FarInput::Monthly(slots) => {
                if slots.len() != MONTHLY_REMUNERATION_SLOTS
                    || slots.iter().any(|slot| slot.is_none())
                {
                    return 0.0;
                }
                slots.iter().flatten().sum::<f64>() / MONTHLY_REMUNERATION_SLOTS as f64
            }
        }
    }
}

/// A member's calculation inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    /// Unique member identifier
    pub member_id: u32,

    /// Date of birth, `DD-MM-YYYY` or `YYYY-MM-DD`
    pub date_of_birth: String,

    /// Date fund participation began
    pub date_of_entry: String,

    /// Date of separation from service
    pub date_of_separation: String,

    /// Member's own contributions to date
    pub own_contributions: f64,

    /// Final average remuneration input
    pub far: FarInput,

    /// Whether a lump-sum commutation was elected
    pub lump_sum_elected: bool,

    /// Elected commutation percentage (capped by the plan rules)
    pub lump_sum_percentage: f64,

    /// Monthly after-service health insurance contribution
    pub ashi_contribution: f64,

    /// Actuarial factor applied to the commuted amount
    pub actuarial_factor: f64,
}

impl MemberProfile {
    /// Create a profile with the three dates; benefit fields default off
    pub fn new(
        member_id: u32,
        date_of_birth: &str,
        date_of_entry: &str,
        date_of_separation: &str,
    ) -> Self {
        Self {
            member_id,
            date_of_birth: date_of_birth.to_string(),
            date_of_entry: date_of_entry.to_string(),
            date_of_separation: date_of_separation.to_string(),
            own_contributions: 0.0,
            far: FarInput::Direct(0.0),
            lump_sum_elected: false,
            lump_sum_percentage: 0.0,
            ashi_contribution: 0.0,
            actuarial_factor: 1.0,
        }
    }

    /// Contributory service between entry and separation
    pub fn service_duration(&self) -> ServiceDuration {
        service_between_strings(&self.date_of_entry, &self.date_of_separation)
    }

    /// Age at separation in fractional years (zero if either date is
    /// unparseable)
    pub fn age_at_separation(&self) -> f64 {
        service_between_strings(&self.date_of_birth, &self.date_of_separation).years_as_float()
    }

    /// Retirement age thresholds for this member's entry date
    pub fn age_thresholds(&self) -> AgeThresholds {
        AgeThresholds::for_entry_str(&self.date_of_entry)
    }

    /// Derived retirement dates; `None` when the date of birth is
    /// unparseable (the screens show blanks in that case)
    pub fn retirement_dates(&self) -> Option<RetirementDates> {
        let dob = CalendarDate::parse(&self.date_of_birth).ok()?;
        Some(RetirementDates::derive(dob, self.age_thresholds()))
    }

    /// Resolved final average remuneration
    pub fn final_average_remuneration(&self) -> f64 {
        self.far.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_far_direct() {
        assert_relative_eq!(FarInput::Direct(85_000.0).resolve(), 85_000.0);
    }

    #[test]
    fn test_far_requires_all_36_slots() {
        let full = FarInput::Monthly(vec![Some(100.0); 36]);
        assert_relative_eq!(full.resolve(), 100.0);

        let mut sparse_slots = vec![Some(100.0); 36];
        sparse_slots[17] = None;
        let sparse = FarInput::Monthly(sparse_slots);
        // Partial data yields 0, never a partial average
        assert_eq!(sparse.resolve(), 0.0);

        let short = FarInput::Monthly(vec![Some(100.0); 35]);
        assert_eq!(short.resolve(), 0.0);
    }

    #[test]
    fn test_far_from_form_strings() {
        let mut raw = vec!["6500.00".to_string(); 36];
        raw[3] = " 6500.00 ".to_string();
        let far = FarInput::monthly_from_strings(&raw);
        assert_relative_eq!(far.resolve(), 6500.0);

        raw[10] = "n/a".to_string();
        let far = FarInput::monthly_from_strings(&raw);
        assert_eq!(far.resolve(), 0.0);
    }

    #[test]
    fn test_derived_service_and_age() {
        let profile = MemberProfile::new(7, "01-01-1965", "01-01-2000", "01-01-2025");

        assert_relative_eq!(profile.service_duration().years_as_float(), 25.0);
        assert_relative_eq!(profile.age_at_separation(), 60.0);
        assert_eq!(profile.age_thresholds().normal, 62);
    }

    #[test]
    fn test_unparseable_dates_degrade_to_zero() {
        let profile = MemberProfile::new(8, "", "not a date", "01-01-2025");

        assert!(profile.service_duration().is_zero());
        assert_eq!(profile.age_at_separation(), 0.0);
        assert!(profile.retirement_dates().is_none());
    }

    #[test]
    fn test_profile_json_round_trip() {
        let mut profile = MemberProfile::new(9, "15-06-1962", "01-03-1995", "30-06-2024");
        profile.own_contributions = 240_000.0;
        profile.far = FarInput::Monthly(vec![Some(7_000.0); 36]);
        profile.lump_sum_elected = true;
        profile.lump_sum_percentage = 30.0;

        let json = serde_json::to_string(&profile).unwrap();
        let back: MemberProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
