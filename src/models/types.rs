use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

use super::bs;

/// Option type: call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    #[default]
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(anyhow!("Invalid option type: {}", other)),
        }
    }
}

/// Market and contract inputs for a single European option.
///
/// The pricing kernel assumes `spot`, `strike`, `time_to_expiry` and `sigma` are
/// strictly positive and never checks it. Callers that take these values from an
/// interactive source should run [`ContractInputs::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractInputs {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub time_to_expiry: f64,
    /// Annualised risk-free rate (r), as decimal
    pub rate: f64,
    /// Annualised volatility (σ), as decimal
    pub sigma: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl ContractInputs {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        sigma: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            rate,
            sigma,
            option_type,
        }
    }

    /// Copy of these inputs with a different spot.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Copy of these inputs with a different risk-free rate.
    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }

    /// Copy of these inputs with a different volatility.
    pub fn with_sigma(self, sigma: f64) -> Self {
        Self { sigma, ..self }
    }

    /// Copy of these inputs with the other option type.
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Black-Scholes price at these inputs.
    pub fn price(&self) -> f64 {
        bs::price(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.rate,
            self.sigma,
            self.option_type,
        )
    }

    /// All five Greeks at these inputs.
    pub fn greeks(&self) -> GreekSet {
        bs::greeks(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.rate,
            self.sigma,
            self.option_type,
        )
    }

    /// Check the inputs against `bounds`.
    ///
    /// Nothing in the pricing or sensitivity path calls this; it exists for
    /// front ends that want to reject values before they turn into NaN.
    pub fn validate(&self, bounds: &InputBounds) -> Result<()> {
        check_range("spot", self.spot, bounds.spot)?;
        check_range("strike", self.strike, bounds.strike)?;
        check_range("time_to_expiry", self.time_to_expiry, bounds.time_to_expiry)?;
        check_range("rate", self.rate, bounds.rate)?;
        check_range("sigma", self.sigma, bounds.sigma)?;

        if self.sigma * self.time_to_expiry.sqrt() <= 0.0 {
            bail!(
                "sigma * sqrt(T) must be positive: sigma={}, T={}",
                self.sigma,
                self.time_to_expiry
            );
        }
        Ok(())
    }
}

impl Default for ContractInputs {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            time_to_expiry: 1.0,
            rate: 0.05,
            sigma: 0.2,
            option_type: OptionType::Call,
        }
    }
}

fn check_range(name: &str, value: f64, (lo, hi): (f64, f64)) -> Result<()> {
    if !value.is_finite() {
        bail!("{} must be finite, got {}", name, value);
    }
    if value < lo || value > hi {
        bail!("{}={} outside [{}, {}]", name, value, lo, hi);
    }
    Ok(())
}

/// Inclusive `(min, max)` ranges accepted by [`ContractInputs::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    pub spot: (f64, f64),
    pub strike: (f64, f64),
    pub time_to_expiry: (f64, f64),
    pub rate: (f64, f64),
    pub sigma: (f64, f64),
}

impl Default for InputBounds {
    /// Ranges exposed by the interactive dashboard controls.
    fn default() -> Self {
        Self {
            spot: (f64::MIN_POSITIVE, 500.0),
            strike: (f64::MIN_POSITIVE, 500.0),
            time_to_expiry: (0.1, 5.0),
            rate: (0.0, 0.2),
            sigma: (0.01, 2.0),
        }
    }
}

/// The five first-order Black-Scholes sensitivities at one point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GreekSet {
    /// dV/dS
    pub delta: f64,
    /// d²V/dS²
    pub gamma: f64,
    /// dV/dσ
    pub vega: f64,
    /// Time decay, see [`bs::theta`] for the exact form
    pub theta: f64,
    /// dV/dr
    pub rho: f64,
}
