use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use numerology::{parse_evaluation_date, KuaFormula, NumerologyReport, ReportInput};

#[derive(Parser)]
#[command(name = "numerology")]
#[command(about = "Print a numerology report for a name and date of birth")]
struct Cli {
    /// Full name
    #[arg(short, long)]
    name: String,

    /// Date of birth, YYYY-MM-DD
    #[arg(short, long)]
    dob: String,

    /// "male"; anything else is treated as female
    #[arg(short, long, default_value = "male")]
    gender: String,

    /// Evaluation date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    on: Option<String>,

    /// Kua formula: century or classic
    #[arg(long, default_value = "century")]
    kua_formula: KuaFormula,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let today = match cli.on.as_deref() {
        Some(date) => parse_evaluation_date(date)?,
        None => Local::now().date_naive(),
    };

    let input = ReportInput::new(&cli.name, &cli.dob, &cli.gender).with_kua_formula(cli.kua_formula);
    let report = NumerologyReport::generate(&input, today)
        .with_context(|| format!("Could not analyze date of birth '{}'", cli.dob))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &NumerologyReport) {
    println!(
        "🔢 Numerology Report - {} ({}, {})",
        report.name,
        report.dob,
        report.gender.as_str()
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!("\n📌 Core numbers");
    println!("   Mulank:      {}", report.mulank);
    println!("   Bhagyank:    {}", report.bhagyank);
    println!("   Kua:         {} ({} formula)", report.kua, report.kua_formula.name());
    println!(
        "   Name number: {} ({})",
        report.name_number.total_sum, report.name_number.single_digit
    );

    println!("\n🀄 Lo Shu grid");
    for row in report.loshu.rows() {
        let cells: Vec<String> = row.iter().map(|count| format!("{:>3}", count)).collect();
        println!("   {}", cells.join(" "));
    }
    println!("   Missing: {:?}", report.missing_numbers);

    let current = &report.periods.current;
    println!("\n📅 Personal periods ({})", current.date);
    println!("   Year {} · Month {} · Day {}", current.personal_year, current.personal_month, current.personal_day);
    let years: Vec<String> = report
        .periods
        .yearly_forecast
        .iter()
        .map(|y| format!("{}:{}", y.year, y.personal_year))
        .collect();
    println!("   Years:  {}", years.join("  "));
    let months: Vec<String> = report
        .periods
        .monthly_forecast
        .iter()
        .map(|m| format!("{}:{}", &m.month[..3], m.personal_month))
        .collect();
    println!("   Months: {}", months.join("  "));

    println!("\n⛰️  Pinnacles & challenges");
    for stage in &report.pinnacles {
        println!(
            "   {:<7} {:<9} pinnacle {:>2}  challenge {}",
            stage.cycle, stage.range, stage.pinnacle, stage.challenge
        );
    }

    if !report.essence.is_empty() {
        println!("\n✨ Essence (first 20 years)");
        let essence: Vec<String> = report.essence.iter().take(20).map(|e| e.essence.to_string()).collect();
        println!("   {}", essence.join(" "));
    }
}
