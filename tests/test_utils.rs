use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sensitivity_lib::{ContractInputs, OptionType};

/// Textbook at-the-money benchmark: S=K=100, T=1, r=5%, σ=20%
pub fn benchmark_inputs(option_type: OptionType) -> ContractInputs {
    ContractInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type)
}

/// Draw `n` call contracts uniformly from the dashboard slider ranges.
///
/// Spot and strike start at 1.0 (the slider minimum) to keep moneyness sane.
#[allow(dead_code)] // Not every test binary uses every helper
pub fn sample_inputs(n: usize, seed: u64) -> Vec<ContractInputs> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            ContractInputs::new(
                rng.gen_range(1.0..=500.0),
                rng.gen_range(1.0..=500.0),
                rng.gen_range(0.1..=5.0),
                rng.gen_range(0.0..=0.2),
                rng.gen_range(0.01..=2.0),
                OptionType::Call,
            )
        })
        .collect()
}

/// Like [`sample_inputs`] but with strikes within ±50% of spot, where prices are
/// comfortably away from zero.
#[allow(dead_code)]
pub fn sample_near_money_inputs(n: usize, seed: u64) -> Vec<ContractInputs> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let spot = rng.gen_range(20.0..=400.0);
            ContractInputs::new(
                spot,
                spot * rng.gen_range(0.5..=1.5),
                rng.gen_range(0.1..=5.0),
                rng.gen_range(0.0..=0.2),
                rng.gen_range(0.05..=1.0),
                OptionType::Call,
            )
        })
        .collect()
}
