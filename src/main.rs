//! Venture Forecast CLI
//!
//! Runs the projection for a JSON configuration (or the built-in baseline
//! scenario) and prints yearly results, unit economics, the tornado
//! ranking, and Monte Carlo percentiles.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use venture_forecast::{
    compute_projection, default_configuration, run_monte_carlo_simulation, run_tornado_analysis,
    Configuration, ProjectResult,
};

#[derive(Parser)]
#[command(name = "venture-forecast", version, about = "Business plan projection and sensitivity analysis")]
struct Cli {
    /// Path to a JSON configuration; omit to use the baseline scenario
    #[arg(long)]
    config: Option<PathBuf>,

    /// Monte Carlo trials
    #[arg(long, default_value_t = venture_forecast::sensitivity::DEFAULT_RUNS)]
    runs: usize,

    /// Seed for reproducible Monte Carlo results
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the full result as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_configuration(cli.config.as_deref())?;
    let result = compute_projection(&config)?;
    let tornado = run_tornado_analysis(&config)?;
    let monte_carlo = run_monte_carlo_simulation(&config, cli.runs, cli.seed)?;

    if cli.json {
        let out = json!({
            "projection": result,
            "tornado": tornado,
            "monte_carlo": monte_carlo,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_years(&result);
    print_metrics(&result);

    println!("\nTornado analysis (final-year EBITDA impact):");
    for item in &tornado {
        println!(
            "  {:<16} -10% => {:>8.2}%   +10% => {:>8.2}%",
            item.parameter.name(),
            item.negative_impact * 100.0,
            item.positive_impact * 100.0,
        );
    }

    println!("\nMonte Carlo ({} trials), final-year EBITDA:", cli.runs);
    println!("  p5  {:>14.2}", monte_carlo.p5);
    println!("  p50 {:>14.2}", monte_carlo.p50);
    println!("  p95 {:>14.2}", monte_carlo.p95);

    Ok(())
}

fn load_configuration(path: Option<&std::path::Path>) -> Result<Configuration> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open configuration {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("cannot parse configuration {}", path.display()))
        }
        None => Ok(default_configuration()),
    }
}

fn print_years(result: &ProjectResult) {
    println!(
        "{:>4} {:>10} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Customers", "Revenue", "Variable", "Structural", "EBITDA"
    );
    println!("{}", "-".repeat(74));

    for year in &result.years {
        println!(
            "{:>4} {:>10.1} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            year.year,
            year.customers,
            year.revenue,
            year.variable_costs,
            year.structural_costs,
            year.ebitda,
        );
    }
}

fn print_metrics(result: &ProjectResult) {
    let ue = &result.unit_economics;

    println!("\nInvestment metrics:");
    println!("  NPV {:>14.2}", result.npv);
    match result.irr {
        Some(irr) => println!("  IRR {:>13.2}%", irr * 100.0),
        None => println!("  IRR      undefined"),
    }

    println!("\nUnit economics:");
    println!("  CAC             {:>10.2}", ue.cac);
    println!("  LTV             {:>10.2}", ue.ltv);
    if ue.payback_months.is_finite() {
        println!("  Payback         {:>10.2} months", ue.payback_months);
    } else {
        println!("  Payback         never");
    }
    match ue.break_even_year {
        Some(year) => println!("  Break-even      year {year}"),
        None => println!("  Break-even      not reached"),
    }
    println!("  Break-even load {:>10.2} rentals/year", ue.break_even_units);
}
