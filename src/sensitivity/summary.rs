use tracing::warn;

use super::types::SensitivityTables;
use crate::models::types::OptionType;

/// Render one plain-language line for a +1% bump of `parameter_name`.
///
/// `percent = 100 * impact / base_price`, taken as 0 when `base_price == 0`.
/// The direction is "raises" only for a strictly positive impact; zero and
/// negative impacts both read "lowers".
///
/// ```
/// use sensitivity_lib::{summary_line, OptionType};
///
/// let line = summary_line("Volatility (σ)", 0.2, 10.0, OptionType::Call);
/// assert_eq!(line, "A 1% increase in Volatility (σ) raises the call price by 2.00%.");
/// ```
pub fn summary_line(
    parameter_name: &str,
    impact: f64,
    base_price: f64,
    option_type: OptionType,
) -> String {
    let percent = if base_price == 0.0 {
        warn!(parameter_name, impact, "zero base price, reporting 0%");
        0.0
    } else {
        impact / base_price * 100.0
    };
    if !percent.is_finite() {
        warn!(parameter_name, impact, base_price, "non-finite price impact");
    }

    let direction = if impact > 0.0 { "raises" } else { "lowers" };
    format!(
        "A 1% increase in {} {} the {} price by {:.2}%.",
        parameter_name,
        direction,
        option_type,
        percent.abs()
    )
}

/// One summary line per table, from that table's Price-row impact.
///
/// Tables without a Price row are skipped.
pub fn summary_lines(
    tables: &SensitivityTables,
    base_price: f64,
    option_type: OptionType,
) -> Vec<String> {
    tables
        .iter()
        .filter_map(|table| {
            table.price_row().map(|row| {
                summary_line(table.parameter.label(), row.impact, base_price, option_type)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_base_price_guard() {
        let line = summary_line("Volatility (σ)", 5.0, 0.0, OptionType::Call);
        assert_eq!(
            line,
            "A 1% increase in Volatility (σ) raises the call price by 0.00%."
        );
    }

    #[test]
    fn test_zero_impact_reads_lowers() {
        let line = summary_line("Interest Rate (r)", 0.0, 10.0, OptionType::Put);
        assert_eq!(
            line,
            "A 1% increase in Interest Rate (r) lowers the put price by 0.00%."
        );
    }

    #[test]
    fn test_negative_impact_uses_absolute_percent() {
        let line = summary_line("Spot Price (S)", -0.25, 5.0, OptionType::Put);
        assert_eq!(
            line,
            "A 1% increase in Spot Price (S) lowers the put price by 5.00%."
        );
    }
}
