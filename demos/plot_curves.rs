// Example: plot_curves.rs
// Samples the price and Greek curves for one contract and writes two SVG charts:
// option price against spot (with the strike marked) and all five Greeks
// against spot on a shared axis.
//
// Usage:
//     cargo run --example plot_curves -- [S K T sigma r call|put]
//
// Output is written to price_curve.svg and greek_curves.svg in the working directory.

use std::env;
use std::error::Error;

use plotters::prelude::*;
use sensitivity_lib::models::utils::{greek_curve, price_curve};
use sensitivity_lib::{default_configs, ContractInputs, GreekSet, OptionType};

fn parse_inputs(args: &[String]) -> Result<ContractInputs, Box<dyn Error>> {
    if args.len() < 6 {
        return Ok(ContractInputs::default());
    }
    Ok(ContractInputs::new(
        args[0].parse()?,
        args[1].parse()?,
        args[2].parse()?,
        args[4].parse()?,
        args[3].parse()?,
        args[5].parse::<OptionType>()?,
    ))
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let pad = ((hi - lo) * 0.05).max(1e-6);
    (lo - pad, hi + pad)
}

fn plot_price(inputs: &ContractInputs, points: &[(f64, f64)]) -> Result<(), Box<dyn Error>> {
    let (x_min, x_max) = min_max(points.iter().map(|p| p.0));
    let (lo, hi) = min_max(points.iter().map(|p| p.1));
    let (y_min, y_max) = padded(lo, hi);

    let root = SVGBackend::new("price_curve.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("Option Price vs. Underlying Price ({})", inputs.option_type),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Underlying Price (S)")
        .y_desc("Option Price")
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(points.to_vec(), BLUE)))?;

    // Strike marker
    if inputs.strike >= x_min && inputs.strike <= x_max {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(inputs.strike, y_min), (inputs.strike, y_max)],
            RED.stroke_width(1),
        )))?;
    }

    println!("Chart saved to price_curve.svg");
    Ok(())
}

fn plot_greeks(samples: &[(f64, GreekSet)]) -> Result<(), Box<dyn Error>> {
    let series: [(&str, RGBColor, fn(&GreekSet) -> f64); 5] = [
        ("Delta", RED, |g| g.delta),
        ("Gamma", BLUE, |g| g.gamma),
        ("Vega", GREEN, |g| g.vega),
        ("Theta", MAGENTA, |g| g.theta),
        ("Rho", BLACK, |g| g.rho),
    ];

    let (x_min, x_max) = min_max(samples.iter().map(|s| s.0));
    let (lo, hi) = min_max(
        samples
            .iter()
            .flat_map(|(_, g)| [g.delta, g.gamma, g.vega, g.theta, g.rho]),
    );
    let (y_min, y_max) = padded(lo, hi);

    let root = SVGBackend::new("greek_curves.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Greeks vs Underlying Price", ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Underlying Price (S)")
        .y_desc("Value")
        .draw()?;

    for (name, color, pick) in series {
        let line: Vec<(f64, f64)> = samples.iter().map(|(s, g)| (*s, pick(g))).collect();
        chart
            .draw_series(std::iter::once(PathElement::new(line, color)))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    println!("Chart saved to greek_curves.svg");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let inputs = parse_inputs(&args)?;
    let config = default_configs::standard();

    let prices = price_curve(&inputs, &config.price_curve);
    let greeks = greek_curve(&inputs, &config.greek_curve);
    println!(
        "Sampled {} price points and {} Greek points for {:?}",
        prices.len(),
        greeks.len(),
        inputs
    );

    plot_price(&inputs, &prices)?;
    plot_greeks(&greeks)?;
    Ok(())
}
