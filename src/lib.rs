//! # Sensitivity-Lib: Black-Scholes Pricing and Sensitivity Reports
//!
//! `sensitivity-lib` prices European options under Black-Scholes, computes the five
//! first-order Greeks, and reports how price and Greeks respond to small relative
//! bumps in volatility, the risk-free rate and spot.
//!
//! ## Core Features
//!
//! - **Pricing Kernel**: closed-form price, delta, gamma, vega, theta and rho
//! - **Sensitivity Tables**: +1% bump of σ, r and S with base vs. bumped price and Greeks
//! - **Stability Check**: ±step perturbation of σ around the base price
//! - **Summaries**: one plain-language line per bumped parameter
//! - **Curves**: price and Greeks sampled over a spot grid, ready to chart
//!
//! ## Quick Start
//!
//! ```rust
//! use sensitivity_lib::{analyze, ContractInputs, OptionType, SensitivityConfig};
//!
//! let inputs = ContractInputs::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//! let report = analyze(&inputs, &SensitivityConfig::default());
//!
//! assert!((report.base_price - 10.4506).abs() < 1e-3);
//! for line in &report.summary {
//!     println!("- {}", line);
//! }
//! ```
//!
//! ## Input Domain
//!
//! The kernel trusts its caller: spot, strike, time to expiry and volatility must be
//! strictly positive. Out-of-domain inputs are not rejected and surface as NaN or
//! infinity in the results. [`ContractInputs::validate`] is available for front ends
//! that want to check values first.
//!
//! ## Configuration Presets
//!
//! - `standard()`: dashboard settings, ±1% σ step and 100-point curves
//! - `coarse()`: 20-point curves for quick checks
//! - `fine()`: 500-point curves and a ±0.1% σ step

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod sensitivity;

// ================================================================================================
// IMPORTS
// ================================================================================================

use serde::Serialize;
use tracing::debug;

use models::utils::{greek_curve, price_curve};

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Inputs and kernel outputs
pub use models::types::{ContractInputs, GreekSet, InputBounds, OptionType};

// Sensitivity engine
pub use sensitivity::{
    config::{CurveConfig, SensitivityConfig, DEFAULT_PERTURBATION_STEP},
    engine::{parameter_table, perturb, sensitivity_table, TABLE_BUMP},
    export::{tables_to_csv_string, write_tables_csv},
    summary::{summary_line, summary_lines},
    types::{
        ImpactRow, Metric, Parameter, PerturbationReport, SensitivityTable, SensitivityTables,
    },
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured report settings.
///
/// # Available Configurations
///
/// - [`standard()`]: settings used by the interactive dashboard
/// - [`coarse()`]: fewer curve points
/// - [`fine()`]: dense curves and a smaller σ step
pub mod default_configs {
    use crate::sensitivity::config::SensitivityConfig;

    /// Dashboard configuration.
    ///
    /// **Characteristics:**
    /// - σ stability step: ±1%
    /// - Price curve: 100 points over `[max(1, S/2), min(2S, 1000)]`
    /// - Greek curves: 100 points over `[S/2, 1.5S]`
    ///
    /// # Example
    ///
    /// ```rust
    /// use sensitivity_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.perturbation_step, 0.01);
    /// ```
    pub fn standard() -> SensitivityConfig {
        SensitivityConfig::standard()
    }

    /// Coarse configuration for tests and quick looks.
    ///
    /// **Characteristics:**
    /// - σ stability step: ±1%
    /// - 20 points per curve
    pub fn coarse() -> SensitivityConfig {
        SensitivityConfig::coarse()
    }

    /// Fine configuration for close inspection of the curves.
    ///
    /// **Characteristics:**
    /// - σ stability step: ±0.1%
    /// - 500 points per curve
    pub fn fine() -> SensitivityConfig {
        SensitivityConfig::fine()
    }
}

// ================================================================================================
// REPORT
// ================================================================================================

/// Everything a front end needs to render one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityReport {
    /// Inputs the report was built from
    pub inputs: ContractInputs,
    /// Price at the inputs
    pub base_price: f64,
    /// Greeks at the inputs
    pub greeks: GreekSet,
    /// `(spot, price)` samples
    pub price_curve: Vec<(f64, f64)>,
    /// `(spot, greeks)` samples
    pub greek_curve: Vec<(f64, GreekSet)>,
    /// +1% bump tables for σ, r and S
    pub tables: SensitivityTables,
    /// ±step σ stability check
    pub perturbation: PerturbationReport,
    /// One line per table
    pub summary: Vec<String>,
}

/// Build a full sensitivity report for `inputs`.
///
/// Runs the pricing kernel at the base point, samples the price and Greek curves,
/// builds the σ/r/S bump tables, the σ stability check and the summary lines.
/// Each piece is computed independently from `inputs`; calling this twice with the
/// same arguments yields identical reports.
///
/// # Example
///
/// ```rust
/// use sensitivity_lib::{analyze, default_configs, ContractInputs, OptionType, Parameter};
///
/// let inputs = ContractInputs::new(100.0, 110.0, 0.5, 0.03, 0.25, OptionType::Put);
/// let report = analyze(&inputs, &default_configs::coarse());
///
/// assert_eq!(report.price_curve.len(), 20);
/// assert_eq!(report.tables.parameters(), Parameter::ALL.to_vec());
/// assert_eq!(report.summary.len(), 3);
/// ```
pub fn analyze(inputs: &ContractInputs, config: &SensitivityConfig) -> SensitivityReport {
    debug!(
        option_type = %inputs.option_type,
        perturbation_step = config.perturbation_step,
        "building sensitivity report"
    );

    let base_price = inputs.price();
    let tables = sensitivity_table(inputs);
    let summary = summary_lines(&tables, base_price, inputs.option_type);

    SensitivityReport {
        inputs: *inputs,
        base_price,
        greeks: inputs.greeks(),
        price_curve: price_curve(inputs, &config.price_curve),
        greek_curve: greek_curve(inputs, &config.greek_curve),
        tables,
        perturbation: perturb(inputs, config.perturbation_step),
        summary,
    }
}
