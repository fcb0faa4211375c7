use super::{emit, ensure_min_length, warn_dropped};
use crate::cli::AnalyzeArgs;
use crate::config::build_config;
use crate::error::Result;
use crate::ui;
use crate::utils::input;
use protparam::workflows::{self, batch::BatchOutcome};
use std::path::Path;
use tracing::info;

const DEFAULT_ID: &str = "sequence";

pub async fn run(args: AnalyzeArgs, config_path: Option<&Path>, set_values: &[String]) -> Result<()> {
    let app = build_config(config_path, set_values, &args.analysis)?;

    let raw = match (&args.sequence, &args.input) {
        (Some(sequence), _) => sequence.clone(),
        (None, Some(path)) => input::read_text(path)?,
        (None, None) => {
            info!("No sequence or input file given; reading from stdin.");
            input::read_text(Path::new("-"))?
        }
    };
    let id = header_id(&raw).unwrap_or_else(|| DEFAULT_ID.to_string());

    info!("Analyzing '{}'...", id);
    let report = workflows::analyze_with(&raw, false, &app.analysis)?;
    warn_dropped(&id, &report);
    ensure_min_length(&report, app.min_length)?;

    let outcome = BatchOutcome {
        id,
        result: Ok(report),
    };
    let rendered = ui::render(args.output.format, std::slice::from_ref(&outcome), false)?;
    emit(&rendered, args.output.output.as_deref())
}

/// First word of a leading FASTA header, if the text has one.
fn header_id(raw: &str) -> Option<String> {
    raw.trim_start()
        .strip_prefix('>')?
        .lines()
        .next()?
        .split_whitespace()
        .next()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_id_takes_first_word_of_header() {
        assert_eq!(
            header_id("  >sp|P69905|HBA_HUMAN Hemoglobin\nMVLS").as_deref(),
            Some("sp|P69905|HBA_HUMAN")
        );
    }

    #[test]
    fn header_id_is_none_without_header() {
        assert_eq!(header_id("MVLSPADKTN"), None);
        assert_eq!(header_id(">\nMVLS"), None);
    }
}
