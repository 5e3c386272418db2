pub mod bs;
pub mod types;

/// Curve sampling helpers used to build the price and Greek charts
pub mod utils {
    use crate::models::types::{ContractInputs, GreekSet};
    use crate::sensitivity::config::CurveConfig;

    /// `n` evenly spaced points from `start` to `end`, both ends included.
    pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            end
                        } else {
                            start + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }

    /// Spot grid around `spot` as described by `config`.
    ///
    /// Lower end is `max(floor, spot * lower_factor)`, upper end is
    /// `min(spot * upper_factor, cap)`. Missing floor or cap leaves that side open.
    pub fn spot_grid(spot: f64, config: &CurveConfig) -> Vec<f64> {
        let mut lo = spot * config.lower_factor;
        if let Some(floor) = config.floor {
            lo = lo.max(floor);
        }
        let mut hi = spot * config.upper_factor;
        if let Some(cap) = config.cap {
            hi = hi.min(cap);
        }
        linspace(lo, hi, config.points)
    }

    /// Option price as a function of spot, all other inputs fixed.
    pub fn price_curve(inputs: &ContractInputs, config: &CurveConfig) -> Vec<(f64, f64)> {
        spot_grid(inputs.spot, config)
            .into_iter()
            .map(|s| (s, inputs.with_spot(s).price()))
            .collect()
    }

    /// The five Greeks as functions of spot, all other inputs fixed.
    pub fn greek_curve(inputs: &ContractInputs, config: &CurveConfig) -> Vec<(f64, GreekSet)> {
        spot_grid(inputs.spot, config)
            .into_iter()
            .map(|s| (s, inputs.with_spot(s).greeks()))
            .collect()
    }
}
