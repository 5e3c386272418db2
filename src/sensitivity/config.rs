use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Relative volatility step used by [`crate::sensitivity::engine::perturb`] when no
/// other value is configured.
pub const DEFAULT_PERTURBATION_STEP: f64 = 0.01;

/// Spot grid settings for a sampled curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Number of grid points, ends included
    #[serde(default = "default_points")]
    pub points: usize,
    /// Grid starts at `spot * lower_factor`
    pub lower_factor: f64,
    /// Grid ends at `spot * upper_factor`
    pub upper_factor: f64,
    /// Lowest spot allowed on the grid
    #[serde(default)]
    pub floor: Option<f64>,
    /// Highest spot allowed on the grid
    #[serde(default)]
    pub cap: Option<f64>,
}

impl CurveConfig {
    /// Grid for the price chart: `[max(1, S/2), min(2S, 1000)]`, 100 points.
    pub fn price_default() -> Self {
        Self {
            points: default_points(),
            lower_factor: 0.5,
            upper_factor: 2.0,
            floor: Some(1.0),
            cap: Some(1000.0),
        }
    }

    /// Grid for the Greeks chart: `[S/2, 1.5S]`, 100 points.
    pub fn greek_default() -> Self {
        Self {
            points: default_points(),
            lower_factor: 0.5,
            upper_factor: 1.5,
            floor: None,
            cap: None,
        }
    }
}

/// Settings for a full sensitivity report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityConfig {
    /// Relative σ step for the stability check (0.01 = ±1%)
    #[serde(default = "default_perturbation_step")]
    pub perturbation_step: f64,

    #[serde(default = "CurveConfig::price_default")]
    pub price_curve: CurveConfig,

    #[serde(default = "CurveConfig::greek_default")]
    pub greek_curve: CurveConfig,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl SensitivityConfig {
    /// Dashboard settings: ±1% σ step, 100-point curves
    pub fn standard() -> Self {
        Self {
            perturbation_step: default_perturbation_step(),
            price_curve: CurveConfig::price_default(),
            greek_curve: CurveConfig::greek_default(),
        }
    }

    /// Cheap settings for quick checks: 20-point curves
    pub fn coarse() -> Self {
        Self {
            price_curve: CurveConfig {
                points: 20,
                ..CurveConfig::price_default()
            },
            greek_curve: CurveConfig {
                points: 20,
                ..CurveConfig::greek_default()
            },
            ..Self::standard()
        }
    }

    /// Dense curves and a smaller σ step for close inspection
    pub fn fine() -> Self {
        Self {
            perturbation_step: 0.001,
            price_curve: CurveConfig {
                points: 500,
                ..CurveConfig::price_default()
            },
            greek_curve: CurveConfig {
                points: 500,
                ..CurveConfig::greek_default()
            },
        }
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Failed to parse sensitivity config")
    }

    /// Load a TOML config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("Invalid config in {}", path.display()))
    }
}

fn default_points() -> usize {
    100
}

fn default_perturbation_step() -> f64 {
    DEFAULT_PERTURBATION_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_standard_config() {
        let config = SensitivityConfig::from_toml_str("").unwrap();
        assert_eq!(config, SensitivityConfig::standard());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = SensitivityConfig::from_toml_str(
            r#"
            perturbation_step = 0.05

            [greek_curve]
            lower_factor = 0.8
            upper_factor = 1.2
            "#,
        )
        .unwrap();

        assert_eq!(config.perturbation_step, 0.05);
        assert_eq!(config.price_curve, CurveConfig::price_default());
        assert_eq!(config.greek_curve.points, 100);
        assert_eq!(config.greek_curve.lower_factor, 0.8);
        assert_eq!(config.greek_curve.cap, None);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(SensitivityConfig::from_toml_str("perturbation_step = \"big\"").is_err());
        assert!(SensitivityConfig::from_path("does/not/exist.toml").is_err());
    }
}
