pub mod analyze;
pub mod batch;
pub mod fetch;

use crate::error::{CliError, Result};
use protparam::PropertyReport;
use std::path::Path;
use tracing::{info, warn};

/// Rejects reports shorter than the configured minimum length.
pub(crate) fn ensure_min_length(report: &PropertyReport, min_length: usize) -> Result<()> {
    if report.length() < min_length {
        return Err(CliError::SequenceTooShort {
            length: report.length(),
            min_length,
        });
    }
    Ok(())
}

pub(crate) fn warn_dropped(id: &str, report: &PropertyReport) {
    let dropped = report.dropped_characters();
    if !dropped.is_empty() {
        warn!("{}: {}", id, dropped);
    }
}

/// Writes rendered output to `path`, or to stdout when no path is given.
pub(crate) fn emit(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Report written to {:?}", path);
            eprintln!("✓ Report written to: {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
