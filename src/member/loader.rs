//! Load member profiles from a benefits-census CSV

use csv::Reader;
use log::{info, warn};
use std::error::Error;
use std::path::Path;

use super::{FarInput, MemberProfile};
use crate::dates::CalendarDate;

/// Raw CSV row matching the census columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "MemberID")]
    member_id: u32,
    #[serde(rename = "DateOfBirth")]
    date_of_birth: String,
    #[serde(rename = "DateOfEntry")]
    date_of_entry: String,
    #[serde(rename = "DateOfSeparation")]
    date_of_separation: String,
    #[serde(rename = "OwnContributions")]
    own_contributions: f64,
    #[serde(rename = "FinalAverageRemuneration")]
    final_average_remuneration: f64,
    #[serde(rename = "LumpSumElected")]
    lump_sum_elected: String,
    #[serde(rename = "LumpSumPct")]
    lump_sum_pct: f64,
    #[serde(rename = "AshiContribution")]
    ashi_contribution: f64,
    #[serde(rename = "ActuarialFactor")]
    actuarial_factor: f64,
}

impl CsvRow {
    fn to_profile(self) -> Result<MemberProfile, Box<dyn Error>> {
        let lump_sum_elected = match self.lump_sum_elected.as_str() {
            "Y" => true,
            "N" => false,
            other => return Err(format!("Unknown LumpSumElected: {}", other).into()),
        };

        // Unparseable dates are accepted (the engines degrade to zero
        // output for them) but worth flagging at load time.
        for (label, value) in [
            ("DateOfBirth", &self.date_of_birth),
            ("DateOfEntry", &self.date_of_entry),
            ("DateOfSeparation", &self.date_of_separation),
        ] {
            if CalendarDate::parse(value).is_err() {
                warn!(
                    "member {}: {} {:?} does not parse; results will be zero-valued",
                    self.member_id, label, value
                );
            }
        }

        Ok(MemberProfile {
            member_id: self.member_id,
            date_of_birth: self.date_of_birth,
            date_of_entry: self.date_of_entry,
            date_of_separation: self.date_of_separation,
            own_contributions: self.own_contributions,
            far: FarInput::Direct(self.final_average_remuneration),
            lump_sum_elected,
            lump_sum_percentage: self.lump_sum_pct,
            ashi_contribution: self.ashi_contribution,
            actuarial_factor: self.actuarial_factor,
        })
    }
}

/// Load all member profiles from a CSV file
pub fn load_members<P: AsRef<Path>>(path: P) -> Result<Vec<MemberProfile>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut members = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        members.push(row.to_profile()?);
    }

    info!("loaded {} member profiles", members.len());
    Ok(members)
}

/// Load member profiles from any reader (e.g., string buffer)
pub fn load_members_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<MemberProfile>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut members = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        members.push(row.to_profile()?);
    }

    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
MemberID,DateOfBirth,DateOfEntry,DateOfSeparation,OwnContributions,FinalAverageRemuneration,LumpSumElected,LumpSumPct,AshiContribution,ActuarialFactor
1001,15-06-1962,01-03-1995,30-06-2024,240000.00,84000.00,Y,30.0,180.00,12.5
1002,1970-11-02,2014-01-01,2024-12-31,55000.00,96000.00,N,0.0,0.00,1.0
";

    #[test]
    fn test_load_from_reader() {
        let members = load_members_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(members.len(), 2);

        let first = &members[0];
        assert_eq!(first.member_id, 1001);
        assert!(first.lump_sum_elected);
        assert_eq!(first.final_average_remuneration(), 84_000.0);

        let second = &members[1];
        assert!(!second.lump_sum_elected);
        assert_eq!(second.age_thresholds().normal, 65);
    }

    #[test]
    fn test_unknown_election_flag_is_an_error() {
        let bad = SAMPLE.replace(",Y,", ",maybe,");
        assert!(load_members_from_reader(bad.as_bytes()).is_err());
    }
}
