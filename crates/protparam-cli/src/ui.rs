//! Renders property reports for the terminal and for machine consumption.

use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use protparam::PropertyReport;
use protparam::core::amino_acid::AminoAcid;
use protparam::workflows::batch::BatchOutcome;
use serde_json::{Value, json};
use std::fmt::Write as _;

const RULE_WIDTH: usize = 60;
const SUBRULE_WIDTH: usize = 40;
const COMPOSITION_COLUMNS: usize = 4;

const DISULFIDE_NOTE: &str =
    "Note: the cystine value assumes every cysteine forms a disulfide bond.";

/// Renders `outcomes` in `format`.
///
/// `batch` selects the multi-record JSON shape (an array) even when there is
/// a single record.
pub fn render(format: OutputFormat, outcomes: &[BatchOutcome], batch: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcomes)),
        OutputFormat::Json => render_json(outcomes, batch),
        OutputFormat::Csv => render_csv(outcomes),
    }
}

pub fn render_text(outcomes: &[BatchOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        match &outcome.result {
            Ok(report) => out.push_str(&text_report(&outcome.id, report)),
            Err(e) => {
                let _ = writeln!(out, "✗ {}: {}", outcome.id, e);
            }
        }
    }
    out
}

fn text_report(id: &str, report: &PropertyReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Protein Physicochemical Properties: {id}");
    let _ = writeln!(out, "{rule}");
    out.push('\n');

    let dropped = report.dropped_characters();
    if !dropped.is_empty() {
        let _ = writeln!(out, "Warning: {dropped}");
    }

    let ext = report.extinction_coefficients();
    let _ = writeln!(out, "Sequence length: {} residues", report.length());
    let _ = writeln!(
        out,
        "Molecular weight: {:.2} kDa ({:.2} Da)",
        report.molecular_weight_kda(),
        report.molecular_weight_da()
    );
    let _ = writeln!(
        out,
        "Isoelectric point (pI): {:.2}",
        report.isoelectric_point()
    );
    let _ = writeln!(
        out,
        "Extinction coefficient (reduced): {:.0} M⁻¹cm⁻¹",
        ext.reduced
    );
    let _ = writeln!(
        out,
        "Extinction coefficient (cystines): {:.0} M⁻¹cm⁻¹",
        ext.cystines
    );
    let _ = writeln!(out, "GRAVY (hydropathy): {:.3}", report.gravy());
    out.push('\n');

    let _ = writeln!(out, "Amino acid composition (%):");
    let _ = writeln!(out, "{}", "-".repeat(SUBRULE_WIDTH));
    for row in report.composition_percent().chunks(COMPOSITION_COLUMNS) {
        let line: String = row
            .iter()
            .map(|(aa, pct)| format!("{}: {:5.1}%  ", aa, pct))
            .collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out.push('\n');

    if report.composition().count(AminoAcid::Cysteine) > 0 {
        let _ = writeln!(out, "{DISULFIDE_NOTE}");
    }
    let _ = writeln!(out, "{rule}");
    out
}

fn json_entry(outcome: &BatchOutcome) -> Result<Value> {
    Ok(match &outcome.result {
        Ok(report) => json!({
            "id": outcome.id,
            "report": serde_json::to_value(report).map_err(|e| CliError::Other(e.into()))?,
        }),
        Err(e) => json!({
            "id": outcome.id,
            "error": e.to_string(),
        }),
    })
}

pub fn render_json(outcomes: &[BatchOutcome], batch: bool) -> Result<String> {
    let entries = outcomes
        .iter()
        .map(json_entry)
        .collect::<Result<Vec<_>>>()?;
    let value = match (batch, entries.len()) {
        (false, 1) => entries.into_iter().next().unwrap_or(Value::Null),
        _ => Value::Array(entries),
    };
    serde_json::to_string_pretty(&value).map_err(|e| CliError::Other(e.into()))
}

fn csv_header() -> Vec<String> {
    let mut header: Vec<String> = [
        "id",
        "length",
        "molecular_weight_da",
        "molecular_weight_kda",
        "isoelectric_point",
        "extinction_reduced",
        "extinction_cystines",
        "gravy",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    header.extend(AminoAcid::ALL.iter().map(|aa| format!("pct_{}", aa)));
    header.push("dropped_characters".to_string());
    header.push("error".to_string());
    header
}

fn csv_row(outcome: &BatchOutcome) -> Vec<String> {
    let blank_columns = 7 + AminoAcid::COUNT + 1;
    match &outcome.result {
        Ok(report) => {
            let ext = report.extinction_coefficients();
            let mut row = vec![
                outcome.id.clone(),
                report.length().to_string(),
                format!("{:.4}", report.molecular_weight_da()),
                format!("{:.4}", report.molecular_weight_kda()),
                format!("{:.2}", report.isoelectric_point()),
                format!("{:.0}", ext.reduced),
                format!("{:.0}", ext.cystines),
                format!("{:.3}", report.gravy()),
            ];
            row.extend(
                report
                    .composition_percent()
                    .iter()
                    .map(|(_, pct)| format!("{:.2}", pct)),
            );
            row.push(report.dropped_characters().count.to_string());
            row.push(String::new());
            row
        }
        Err(e) => {
            let mut row = vec![outcome.id.clone()];
            row.extend(std::iter::repeat_n(String::new(), blank_columns));
            row.push(e.to_string());
            row
        }
    }
}

pub fn render_csv(outcomes: &[BatchOutcome]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(csv_header())
        .map_err(|e| CliError::Other(e.into()))?;
    for outcome in outcomes {
        writer
            .write_record(csv_row(outcome))
            .map_err(|e| CliError::Other(e.into()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to flush CSV output: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| CliError::Other(e.into()))
}
