use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use super::types::SensitivityTables;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    parameter: &'a str,
    metric: String,
    base_value: f64,
    bumped_value: f64,
    base: f64,
    perturbed: f64,
    impact: f64,
}

/// Write every table as flat CSV, one record per (parameter, metric).
///
/// Columns: `parameter, metric, base_value, bumped_value, base, perturbed, impact`.
pub fn write_tables_csv<W: Write>(tables: &SensitivityTables, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for table in tables {
        for row in &table.rows {
            wtr.serialize(CsvRow {
                parameter: table.parameter.label(),
                metric: row.metric.to_string(),
                base_value: table.base_value,
                bumped_value: table.bumped_value,
                base: row.base,
                perturbed: row.perturbed,
                impact: row.impact,
            })
            .with_context(|| {
                format!(
                    "Failed to write {} row for {}",
                    row.metric,
                    table.parameter.name()
                )
            })?;
        }
    }
    wtr.flush().context("Failed to flush sensitivity CSV")?;
    Ok(())
}

/// Same as [`write_tables_csv`] but into a `String`.
pub fn tables_to_csv_string(tables: &SensitivityTables) -> Result<String> {
    let mut buf = Vec::new();
    write_tables_csv(tables, &mut buf)?;
    String::from_utf8(buf).context("Sensitivity CSV is not valid UTF-8")
}
