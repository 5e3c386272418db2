mod test_utils;

use sensitivity_lib::{
    analyze, default_configs, perturb, sensitivity_table, summary_line, summary_lines,
    tables_to_csv_string, Metric, OptionType, Parameter, SensitivityConfig,
    DEFAULT_PERTURBATION_STEP,
};
use test_utils::{benchmark_inputs, sample_near_money_inputs};

#[test]
fn test_perturbation_base_leg_matches_price() {
    for option_type in [OptionType::Call, OptionType::Put] {
        let inputs = benchmark_inputs(option_type);
        let report = perturb(&inputs, DEFAULT_PERTURBATION_STEP);
        assert_eq!(report.base_price, inputs.price());
    }
}

/// Vega is non-negative, so a call gains value when σ rises and loses it when σ falls.
/// Deep in the money both legs can round to the same price, hence the small slack.
#[test]
fn test_call_impact_sign_follows_vega() {
    for inputs in sample_near_money_inputs(500, 42) {
        let report = perturb(&inputs, 0.01);
        assert!(
            report.impact_up >= -1e-10,
            "σ +1% should not lower the call price for {:?}: {:?}",
            inputs,
            report
        );
        assert!(
            report.impact_down <= 1e-10,
            "σ -1% should not raise the call price for {:?}: {:?}",
            inputs,
            report
        );
    }
}

#[test]
fn test_benchmark_perturbation_values() {
    let report = perturb(&benchmark_inputs(OptionType::Call), 0.01);
    assert!((report.impact_up - 0.07507).abs() < 1e-4, "{:?}", report);
    assert!((report.impact_down + 0.07503).abs() < 1e-4, "{:?}", report);
    assert!(report.price_sigma_up > report.base_price);
    assert!(report.price_sigma_down < report.base_price);
}

#[test]
fn test_table_order_and_shape() {
    let tables = sensitivity_table(&benchmark_inputs(OptionType::Call));

    assert_eq!(
        tables.parameters(),
        vec![
            Parameter::Volatility,
            Parameter::InterestRate,
            Parameter::SpotPrice
        ]
    );
    for table in &tables {
        assert_eq!(table.rows.len(), Metric::ALL.len());
        for row in &table.rows {
            assert_eq!(row.impact, row.perturbed - row.base);
        }
        assert_eq!(table.bumped_value, table.base_value * 1.01);
    }
}

/// Each table bumps exactly one input; the base leg is the same for all of them.
#[test]
fn test_table_parameter_isolation() {
    let inputs = benchmark_inputs(OptionType::Put);
    let tables = sensitivity_table(&inputs);

    let rate = tables.get(Parameter::InterestRate).unwrap();
    let spot = tables.get(Parameter::SpotPrice).unwrap();
    let vol = tables.get(Parameter::Volatility).unwrap();

    assert_eq!(rate.price_row().unwrap().base, spot.price_row().unwrap().base);
    assert_eq!(vol.price_row().unwrap().base, inputs.price());

    // Bumping S by 1% must match pricing at S*1.01 with r and σ untouched
    let bumped = inputs.with_spot(inputs.spot * 1.01);
    assert_eq!(spot.price_row().unwrap().perturbed, bumped.price());
    assert_eq!(
        spot.row(Metric::Vega).unwrap().perturbed,
        bumped.greeks().vega
    );

    // Rate and spot bumps move delta by different amounts
    assert_ne!(
        rate.row(Metric::Delta).unwrap().perturbed,
        spot.row(Metric::Delta).unwrap().perturbed
    );
}

#[test]
fn test_benchmark_summary_lines() {
    let inputs = benchmark_inputs(OptionType::Call);
    let tables = sensitivity_table(&inputs);
    let lines = summary_lines(&tables, inputs.price(), inputs.option_type);

    assert_eq!(
        lines,
        vec![
            "A 1% increase in Volatility (σ) raises the call price by 0.72%.".to_string(),
            "A 1% increase in Interest Rate (r) raises the call price by 0.25%.".to_string(),
            "A 1% increase in Spot Price (S) raises the call price by 6.18%.".to_string(),
        ]
    );
}

#[test]
fn test_put_spot_summary_reads_lowers() {
    let inputs = benchmark_inputs(OptionType::Put);
    let tables = sensitivity_table(&inputs);
    let lines = summary_lines(&tables, inputs.price(), OptionType::Put);

    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("Interest Rate (r) lowers the put price"));
    assert!(lines[2].contains("Spot Price (S) lowers the put price"));
}

#[test]
fn test_summary_zero_base_guard() {
    let line = summary_line("Volatility", 5.0, 0.0, OptionType::Call);
    assert!(line.contains("0.00%"), "unexpected line: {}", line);
    assert!(line.ends_with("the call price by 0.00%."));
}

#[test]
fn test_csv_export() {
    let tables = sensitivity_table(&benchmark_inputs(OptionType::Call));
    let csv = tables_to_csv_string(&tables).expect("CSV export failed");

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "parameter",
            "metric",
            "base_value",
            "bumped_value",
            "base",
            "perturbed",
            "impact"
        ]
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3 * Metric::ALL.len());
    assert_eq!(&records[0][0], "Volatility (σ)");
    assert_eq!(&records[0][1], "Price");
    assert_eq!(&records[17][0], "Spot Price (S)");
    assert_eq!(&records[17][1], "Rho");
}

#[test]
fn test_full_report() {
    let inputs = benchmark_inputs(OptionType::Call);
    let config = SensitivityConfig::default();
    let report = analyze(&inputs, &config);

    assert_eq!(report.base_price, inputs.price());
    assert_eq!(report.greeks, inputs.greeks());
    assert_eq!(report.perturbation, perturb(&inputs, 0.01));
    assert_eq!(report.tables, sensitivity_table(&inputs));
    assert_eq!(report.summary.len(), 3);

    // Price curve: [max(1, 50), min(200, 1000)]
    assert_eq!(report.price_curve.len(), 100);
    assert_eq!(report.price_curve[0].0, 50.0);
    assert_eq!(report.price_curve[99].0, 200.0);

    // Greek curve: [50, 150]
    assert_eq!(report.greek_curve.len(), 100);
    assert_eq!(report.greek_curve[0].0, 50.0);
    assert_eq!(report.greek_curve[99].0, 150.0);
    for (spot, greeks) in &report.greek_curve {
        assert_eq!(*greeks, inputs.with_spot(*spot).greeks(), "Greeks at S={}", spot);
    }

    // Same inputs, same report
    assert_eq!(analyze(&inputs, &config), report);
}

#[test]
fn test_price_curve_floor_and_cap() {
    let config = default_configs::coarse();

    let low = analyze(&benchmark_inputs(OptionType::Call).with_spot(1.5), &config);
    assert_eq!(low.price_curve[0].0, 1.0);

    let high = analyze(&benchmark_inputs(OptionType::Call).with_spot(700.0), &config);
    assert_eq!(high.price_curve.last().unwrap().0, 1000.0);
    assert_eq!(high.greek_curve.last().unwrap().0, 1050.0);
}
