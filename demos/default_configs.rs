use sensitivity_lib::{analyze, default_configs, ContractInputs, OptionType, SensitivityConfig};

fn main() {
    let inputs = ContractInputs::new(120.0, 100.0, 0.75, 0.04, 0.35, OptionType::Put);

    println!("Sensitivity-lib Default Configuration Examples\n");

    let presets = [
        ("Standard (dashboard)", default_configs::standard()),
        ("Coarse (quick checks)", default_configs::coarse()),
        ("Fine (close inspection)", default_configs::fine()),
    ];

    for (i, (name, config)) in presets.iter().enumerate() {
        println!("{}. {} Configuration:", i + 1, name);
        println!(
            "   σ perturbation step: ±{:.1}%",
            config.perturbation_step * 100.0
        );
        println!(
            "   Price curve: {} points, factors [{}, {}], floor {:?}, cap {:?}",
            config.price_curve.points,
            config.price_curve.lower_factor,
            config.price_curve.upper_factor,
            config.price_curve.floor,
            config.price_curve.cap
        );
        println!(
            "   Greek curve: {} points, factors [{}, {}]",
            config.greek_curve.points,
            config.greek_curve.lower_factor,
            config.greek_curve.upper_factor
        );

        let report = analyze(&inputs, config);
        println!(
            "   σ stability: {:+.4} / {:+.4}\n",
            report.perturbation.impact_up, report.perturbation.impact_down
        );
    }

    // Custom configuration from TOML, unspecified keys keep their defaults
    let custom = SensitivityConfig::from_toml_str(
        r#"
        perturbation_step = 0.05

        [price_curve]
        points = 50
        lower_factor = 0.8
        upper_factor = 1.2
        "#,
    );
    match custom {
        Ok(config) => {
            println!("4. Custom TOML Configuration:");
            println!(
                "   σ perturbation step: ±{:.1}%",
                config.perturbation_step * 100.0
            );
            println!(
                "   Price curve: {} points, factors [{}, {}]",
                config.price_curve.points,
                config.price_curve.lower_factor,
                config.price_curve.upper_factor
            );
        }
        Err(e) => eprintln!("Failed to parse custom config: {:#}", e),
    }
}
