//! Pension System CLI
//!
//! Demo calculation for a sample member, printed as a statement

use pension_system::benefits::{flat_reduction_estimate, simple_interest_estimate};
use pension_system::member::FarInput;
use pension_system::{MemberProfile, ScenarioRunner};

fn main() {
    env_logger::init();

    println!("Pension System v0.1.0");
    println!("=====================\n");

    // Sample member: 25 years of service, separating at 60 under the
    // 62/55 thresholds (entry in 2000)
    let mut member = MemberProfile::new(1001, "01-01-1965", "01-01-2000", "01-01-2025");
    member.own_contributions = 200_000.0;
    member.far = FarInput::Direct(120_000.0);
    member.lump_sum_elected = true;
    member.lump_sum_percentage = 30.0;
    member.ashi_contribution = 200.0;
    member.actuarial_factor = 12.5;

    println!("Member: {}", member.member_id);
    println!("  Date of Birth:      {}", member.date_of_birth);
    println!("  Date of Entry:      {}", member.date_of_entry);
    println!("  Date of Separation: {}", member.date_of_separation);
    println!("  Own Contributions:  ${:.2}", member.own_contributions);
    println!();

    let runner = ScenarioRunner::new();
    let statement = runner.run(&member);

    println!("Service: {}", statement.service);
    println!("Eligibility: {}", statement.pension.eligibility.as_str());
    println!();
    println!("Retirement Dates:");
    println!("  Early:     {}", statement.early_retirement_date);
    println!("  Normal:    {}", statement.normal_retirement_date);
    println!("  Mandatory: {}", statement.mandatory_separation_date);
    println!();

    let pension = &statement.pension;
    println!("Periodic Benefit:");
    println!("  Annual Pension (unreduced):  ${:>12.2}", pension.annual_pension);
    println!(
        "  Early Reduction:             {:>12.2}%",
        pension.early_retirement_reduction
    );
    println!("  Monthly Pension:             ${:>12.2}", pension.monthly_pension);
    println!("  Lump Sum:                    ${:>12.2}", pension.lump_sum);
    println!(
        "  Monthly After Commutation:   ${:>12.2}",
        pension.reduced_monthly_pension
    );
    println!(
        "  COLA-Adjusted Monthly:       ${:>12.2}",
        pension.cola_adjusted_pension
    );
    println!(
        "  Final Periodic Benefit:      ${:>12.2}",
        pension.final_periodic_benefit
    );
    println!();

    let withdrawal = &statement.withdrawal;
    println!("Withdrawal Settlement (alternative):");
    println!("  Contributions: ${:>12.2}", withdrawal.own_contributions);
    println!("  Interest:      ${:>12.2}", withdrawal.interest);
    println!("  Bonus ({:>3.0}%):  ${:>12.2}", withdrawal.bonus_rate * 100.0, withdrawal.bonus_amount);
    println!("  Total:         ${:>12.2}", withdrawal.total);
    println!();

    // Legacy quick estimates shown alongside the authoritative figures
    let thresholds = member.age_thresholds();
    println!("Quick Estimates (legacy preview formulas):");
    println!(
        "  Flat Reduction:   {:.1}%",
        flat_reduction_estimate(member.age_at_separation(), thresholds.normal) * 100.0
    );
    println!(
        "  Simple Settlement: ${:.2}",
        simple_interest_estimate(
            member.own_contributions,
            statement.service.years_as_float()
        )
    );
    println!();

    // What-if table: benefit at each month-end over the coming year
    println!("Separation-Date Sweep (2025):");
    println!(
        "{:>12} {:>10} {:>14} {:>14}",
        "Date", "Service", "Monthly", "Settlement"
    );
    println!("{}", "-".repeat(54));
    for row in runner.sweep_separation_dates(&member, "01-01-2025", "31-12-2025") {
        println!(
            "{:>12} {:>10.3} {:>14.2} {:>14.2}",
            row.separation_date,
            row.service.years_as_float(),
            row.pension.final_periodic_benefit,
            row.withdrawal.total,
        );
    }
}
