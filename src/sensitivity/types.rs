use std::fmt;

use serde::Serialize;

use crate::models::types::{ContractInputs, GreekSet};

/// Output quantity compared in a sensitivity table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Price,
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

impl Metric {
    /// Table row order
    pub const ALL: [Metric; 6] = [
        Metric::Price,
        Metric::Delta,
        Metric::Gamma,
        Metric::Vega,
        Metric::Theta,
        Metric::Rho,
    ];

    /// Pick this metric out of a price and its Greeks.
    pub fn select(self, price: f64, greeks: &GreekSet) -> f64 {
        match self {
            Metric::Price => price,
            Metric::Delta => greeks.delta,
            Metric::Gamma => greeks.gamma,
            Metric::Vega => greeks.vega,
            Metric::Theta => greeks.theta,
            Metric::Rho => greeks.rho,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Price => "Price",
            Metric::Delta => "Delta",
            Metric::Gamma => "Gamma",
            Metric::Vega => "Vega",
            Metric::Theta => "Theta",
            Metric::Rho => "Rho",
        };
        f.write_str(name)
    }
}

/// Input that a sensitivity table bumps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Parameter {
    Volatility,
    InterestRate,
    SpotPrice,
}

impl Parameter {
    /// Report order
    pub const ALL: [Parameter; 3] = [
        Parameter::Volatility,
        Parameter::InterestRate,
        Parameter::SpotPrice,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Parameter::Volatility => "Volatility",
            Parameter::InterestRate => "Interest Rate",
            Parameter::SpotPrice => "Spot Price",
        }
    }

    /// Name with the model symbol, as shown in reports and summary lines
    pub fn label(self) -> &'static str {
        match self {
            Parameter::Volatility => "Volatility (σ)",
            Parameter::InterestRate => "Interest Rate (r)",
            Parameter::SpotPrice => "Spot Price (S)",
        }
    }

    /// Current value of this parameter in `inputs`.
    pub fn value(self, inputs: &ContractInputs) -> f64 {
        match self {
            Parameter::Volatility => inputs.sigma,
            Parameter::InterestRate => inputs.rate,
            Parameter::SpotPrice => inputs.spot,
        }
    }

    /// `inputs` with only this parameter replaced by `value`.
    pub fn apply(self, inputs: &ContractInputs, value: f64) -> ContractInputs {
        match self {
            Parameter::Volatility => inputs.with_sigma(value),
            Parameter::InterestRate => inputs.with_rate(value),
            Parameter::SpotPrice => inputs.with_spot(value),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One metric evaluated at the base point and at the bumped point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactRow {
    pub metric: Metric,
    pub base: f64,
    pub perturbed: f64,
    /// `perturbed - base`
    pub impact: f64,
}

impl ImpactRow {
    pub fn new(metric: Metric, base: f64, perturbed: f64) -> Self {
        Self {
            metric,
            base,
            perturbed,
            impact: perturbed - base,
        }
    }
}

/// Effect of bumping a single parameter on price and every Greek
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityTable {
    pub parameter: Parameter,
    /// Parameter value before the bump
    pub base_value: f64,
    /// Parameter value after the bump
    pub bumped_value: f64,
    /// One row per [`Metric`], in [`Metric::ALL`] order
    pub rows: Vec<ImpactRow>,
}

impl SensitivityTable {
    pub fn row(&self, metric: Metric) -> Option<&ImpactRow> {
        self.rows.iter().find(|row| row.metric == metric)
    }

    /// The Price row, which every table carries.
    pub fn price_row(&self) -> Option<&ImpactRow> {
        self.row(Metric::Price)
    }
}

/// Sensitivity tables keyed by parameter, in insertion order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SensitivityTables {
    tables: Vec<SensitivityTable>,
}

impl SensitivityTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `table`, replacing an existing table for the same parameter in place.
    pub fn insert(&mut self, table: SensitivityTable) {
        match self
            .tables
            .iter_mut()
            .find(|t| t.parameter == table.parameter)
        {
            Some(existing) => *existing = table,
            None => self.tables.push(table),
        }
    }

    pub fn get(&self, parameter: Parameter) -> Option<&SensitivityTable> {
        self.tables.iter().find(|t| t.parameter == parameter)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SensitivityTable> {
        self.tables.iter()
    }

    pub fn parameters(&self) -> Vec<Parameter> {
        self.tables.iter().map(|t| t.parameter).collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<'a> IntoIterator for &'a SensitivityTables {
    type Item = &'a SensitivityTable;
    type IntoIter = std::slice::Iter<'a, SensitivityTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

/// Price response to a symmetric relative step in σ
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerturbationReport {
    pub base_price: f64,
    /// Price at `sigma * (1 + step)`
    pub price_sigma_up: f64,
    /// Price at `sigma * (1 - step)`
    pub price_sigma_down: f64,
    /// `price_sigma_up - base_price`
    pub impact_up: f64,
    /// `price_sigma_down - base_price`
    pub impact_down: f64,
}
