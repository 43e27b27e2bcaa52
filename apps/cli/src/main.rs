#![deny(warnings)]

//! Headless CLI for stress-testing business financials against market shocks.

mod scenarios;

use anyhow::{bail, Context, Result};
use resil_core::{Insight, SimulationConfig, SimulationResult};
use resil_sim::simulate;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

struct Args {
    company: String,
    shock: String,
    horizon: u32,
    scenario_file: Option<String>,
    output: Option<String>,
    quiet: bool,
    list: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        company: "custom".to_string(),
        shock: "no-shock".to_string(),
        horizon: 12,
        scenario_file: None,
        output: None,
        quiet: false,
        list: false,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--company" => {
                if let Some(v) = it.next() {
                    args.company = v;
                }
            }
            "--shock" => {
                if let Some(v) = it.next() {
                    args.shock = v;
                }
            }
            "--horizon" => {
                args.horizon = it.next().and_then(|s| s.parse().ok()).unwrap_or(args.horizon);
            }
            "--scenario-file" => args.scenario_file = it.next(),
            "--output" => args.output = it.next(),
            "--quiet" => args.quiet = true,
            "--list" => args.list = true,
            _ => {}
        }
    }
    args
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args();
    info!(
        git_sha = env!("GIT_SHA"),
        build_date = env!("BUILD_DATE"),
        "starting resilience CLI"
    );

    if args.list {
        println!("Company presets:");
        for name in scenarios::COMPANIES {
            println!("  {name}");
        }
        println!("Shock presets:");
        for name in scenarios::SHOCKS {
            println!("  {name}");
        }
        return Ok(());
    }

    let (baseline, shock, config) = if let Some(path) = &args.scenario_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario file {path}"))?;
        let sc: scenarios::ScenarioFile =
            serde_yaml::from_str(&text).with_context(|| format!("parsing {path}"))?;
        let horizon = sc.horizon_months.unwrap_or(args.horizon);
        (
            sc.baseline,
            sc.shock,
            SimulationConfig {
                horizon_months: horizon,
            },
        )
    } else {
        let Some(baseline) = scenarios::company(&args.company) else {
            bail!("unknown company preset `{}`; try --list", args.company);
        };
        let Some(shock) = scenarios::shock(&args.shock) else {
            bail!("unknown shock preset `{}`; try --list", args.shock);
        };
        (
            baseline,
            shock,
            SimulationConfig {
                horizon_months: args.horizon,
            },
        )
    };

    info!(
        horizon_months = config.horizon_months,
        payment_delay_months = shock.payment_delay_months,
        "running projection"
    );
    let result = simulate(&baseline, &shock, &config)?;

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("creating {path}"))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &result).context("serializing result")?;
        writer.flush()?;
        info!("wrote projection to {path}");
    }

    if !args.quiet {
        print_report(&result, config.horizon_months);
    }

    Ok(())
}

fn print_report(result: &SimulationResult, horizon: u32) {
    let (baseline_end, shock_end) = match result.end_of_horizon() {
        Some(point) => (
            point.baseline_balance.to_string(),
            point.shock_balance.to_string(),
        ),
        None => ("-".to_string(), "-".to_string()),
    };

    println!("\n=== Scenario summary ({horizon} months) ===");
    println!(
        "{:<10} | {:>20} | {:>20}",
        "Scenario", "Annual profit", "End-of-horizon cash"
    );
    println!(
        "{:<10} | {:>20} | {:>20}",
        "Baseline",
        result.annual_baseline_profit.to_string(),
        baseline_end
    );
    println!(
        "{:<10} | {:>20} | {:>20}",
        "Shocked",
        result.annual_shock_profit.to_string(),
        shock_end
    );

    println!("\n=== Monthly cash balance ===");
    println!("{:>5} | {:>20} | {:>20}", "Month", "Baseline", "Shocked");
    for point in &result.months {
        println!(
            "{:>5} | {:>20} | {:>20}",
            point.month,
            point.baseline_balance.to_string(),
            point.shock_balance.to_string()
        );
    }

    println!("\n=== Resilience insights ===");
    for insight in &result.insights {
        println!("  {}", describe(insight));
    }
}

/// Human-readable rendering of an insight tag.
fn describe(insight: &Insight) -> String {
    match insight {
        Insight::Unprofitable => "Warning: the business is not profitable under the shocked \
             scenario. Consider cost-saving measures or new revenue sources."
            .to_string(),
        Insight::ProfitImproved => {
            "No negative impact: profit increases under this scenario.".to_string()
        }
        Insight::MinorImpact => "Minor impact: profit declines slightly under shock, but the \
             business remains resilient."
            .to_string(),
        Insight::ModerateImpact => "Moderate impact: significant drop in profit. Monitor \
             closely and explore mitigations."
            .to_string(),
        Insight::MajorImpact => {
            "Major impact: profit drops sharply. Review strategies for resilience.".to_string()
        }
        Insight::InsolventAtMonth(month) => format!(
            "Critical: cash runs out in month {month} of the simulation. Immediate changes \
             required to avoid insolvency."
        ),
        Insight::SolventAndProfitable => "Strong cash position: cash remains positive \
             throughout the simulation under shock."
            .to_string(),
        Insight::SolventButUnprofitable => "Cash positive but unprofitable: solvent for now, \
             but review the profit model."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_names_the_insolvency_month() {
        let text = describe(&Insight::InsolventAtMonth(3));
        assert!(text.contains("month 3"));
    }
}
