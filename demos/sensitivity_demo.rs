// demos/sensitivity_demo.rs

//! Console rendition of the options sensitivity dashboard
//!
//! This example shows how to:
//! 1. Build contract inputs (optionally from the command line)
//! 2. Price the option and compute its Greeks
//! 3. Print the +1% sensitivity tables and the σ stability check
//! 4. Print the plain-language summary
//!
//! Usage:
//!     cargo run --example sensitivity_demo -- [S K T sigma r call|put] [config.toml]
//!
//! Set `RUST_LOG=sensitivity_lib=debug` to see engine tracing.

use std::env;

use anyhow::{bail, Context, Result};
use sensitivity_lib::{
    analyze, write_tables_csv, ContractInputs, InputBounds, OptionType, SensitivityConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let inputs = parse_inputs(&args)?;
    inputs
        .validate(&InputBounds::default())
        .context("Inputs outside dashboard ranges")?;

    let config = match args.get(6) {
        Some(path) => SensitivityConfig::from_path(path)?,
        None => SensitivityConfig::default(),
    };

    println!("Options Pricing Sensitivity Dashboard");
    println!("=====================================");
    println!(
        "S={:.2} K={:.2} T={:.2}y σ={:.2} r={:.3} ({})",
        inputs.spot,
        inputs.strike,
        inputs.time_to_expiry,
        inputs.sigma,
        inputs.rate,
        inputs.option_type
    );

    let report = analyze(&inputs, &config);

    println!("\nPrice Analysis");
    println!("  Current Option Price: ${:.2}", report.base_price);
    println!(
        "  Price curve: {} points, S in [{:.2}, {:.2}]",
        report.price_curve.len(),
        report.price_curve.first().map(|p| p.0).unwrap_or(f64::NAN),
        report.price_curve.last().map(|p| p.0).unwrap_or(f64::NAN)
    );

    println!("\nGreeks Analysis");
    let g = report.greeks;
    println!("  Delta: {:>10.4}", g.delta);
    println!("  Gamma: {:>10.4}", g.gamma);
    println!("  Vega:  {:>10.4}", g.vega);
    println!("  Theta: {:>10.4}", g.theta);
    println!("  Rho:   {:>10.4}", g.rho);

    println!("\nSensitivity Analysis");
    println!(
        "{:<20} {:>12} {:>12} {:>12}",
        "Parameter", "Base Value", "+1% Value", "Price Impact"
    );
    println!("{}", "-".repeat(60));
    for table in &report.tables {
        let impact = table.price_row().map(|r| r.impact).unwrap_or(f64::NAN);
        println!(
            "{:<20} {:>12.4} {:>12.4} {:>+12.4}",
            table.parameter.label(),
            table.base_value,
            table.bumped_value,
            impact
        );
    }

    println!("\nStability Check: Volatility (σ) Perturbation");
    let p = report.perturbation;
    println!("  - Base Price: ${:.4}", p.base_price);
    println!(
        "  - σ (+{step}%) → Price: ${:.4} (Impact: {:+.4})",
        p.price_sigma_up,
        p.impact_up,
        step = config.perturbation_step * 100.0
    );
    println!(
        "  - σ (-{step}%) → Price: ${:.4} (Impact: {:+.4})",
        p.price_sigma_down,
        p.impact_down,
        step = config.perturbation_step * 100.0
    );

    println!("\nSummary");
    for line in &report.summary {
        println!("  - {}", line);
    }

    println!("\nFull tables (CSV):");
    write_tables_csv(&report.tables, std::io::stdout())?;

    Ok(())
}

fn parse_inputs(args: &[String]) -> Result<ContractInputs> {
    if args.is_empty() {
        return Ok(ContractInputs::default());
    }
    if args.len() < 6 {
        bail!("Expected S K T sigma r call|put, got {} values", args.len());
    }

    let num = |i: usize, name: &str| -> Result<f64> {
        args[i]
            .parse::<f64>()
            .with_context(|| format!("Invalid {}: {}", name, args[i]))
    };

    Ok(ContractInputs::new(
        num(0, "S")?,
        num(1, "K")?,
        num(2, "T")?,
        num(4, "r")?,
        num(3, "sigma")?,
        args[5].parse::<OptionType>()?,
    ))
}
