//! Run benefit statements for an entire member census CSV
//!
//! Outputs one row per member for downstream comparison

use anyhow::Context;
use clap::Parser;
use pension_system::member::load_members;
use pension_system::ScenarioRunner;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Compute benefit statements for every member in a census CSV
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the member census CSV
    #[arg(long, default_value = "member_census.csv")]
    input: PathBuf,

    /// Path for the output CSV
    #[arg(long, default_value = "benefit_statements.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading members from {}...", args.input.display());

    let members = load_members(&args.input)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    println!("Loaded {} members in {:?}", members.len(), start.elapsed());

    println!("Computing benefit statements...");
    let compute_start = Instant::now();

    let runner = ScenarioRunner::new();
    let statements: Vec<_> = members
        .par_iter()
        .map(|member| runner.run(member))
        .collect();

    println!(
        "Computed {} statements in {:?}",
        statements.len(),
        compute_start.elapsed()
    );

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    writeln!(
        file,
        "MemberID,SeparationDate,ServiceYears,ServiceMonths,ServiceDays,YearsOfService,\
         Eligibility,AnnualPension,EarlyReductionPct,MonthlyPension,LumpSum,\
         ReducedMonthlyPension,ColaAdjustedPension,FinalPeriodicBenefit,\
         WithdrawalInterest,WithdrawalBonusPct,WithdrawalTotal,\
         EarlyRetirementDate,NormalRetirementDate,MandatorySeparationDate"
    )?;

    for s in &statements {
        writeln!(
            file,
            "{},{},{},{},{},{:.6},{},{:.2},{:.4},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.4},{:.2},{},{},{}",
            s.member_id,
            s.separation_date,
            s.service.years,
            s.service.months,
            s.service.days,
            s.service.years_as_float(),
            s.pension.eligibility.as_str(),
            s.pension.annual_pension,
            s.pension.early_retirement_reduction,
            s.pension.monthly_pension,
            s.pension.lump_sum,
            s.pension.reduced_monthly_pension,
            s.pension.cola_adjusted_pension,
            s.pension.final_periodic_benefit,
            s.withdrawal.interest,
            s.withdrawal.bonus_rate * 100.0,
            s.withdrawal.total,
            s.early_retirement_date,
            s.normal_retirement_date,
            s.mandatory_separation_date,
        )?;
    }

    println!("Statements written to: {}", args.output.display());
    Ok(())
}
