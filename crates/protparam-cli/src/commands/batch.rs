use crate::cli::BatchArgs;
use crate::config::build_config;
use crate::error::Result;
use crate::ui;
use crate::utils::{fasta, input, progress::CliProgressHandler};
use protparam::engine::progress::ProgressReporter;
use protparam::workflows::batch::{self, BatchOutcome};
use std::path::Path;
use tracing::{info, warn};

pub async fn run(args: BatchArgs, config_path: Option<&Path>, set_values: &[String]) -> Result<()> {
    let app = build_config(config_path, set_values, &args.analysis)?;

    let text = input::read_text(&args.input)?;
    let records = fasta::parse_records(&text)?;
    info!("Read {} record(s) from {:?}", records.len(), &args.input);

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let outcomes =
        tokio::task::block_in_place(|| batch::run(&records, &app.analysis, &reporter));

    let outcomes = apply_min_length(outcomes, app.min_length);
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    eprintln!(
        "Analyzed {} record(s): {} succeeded, {} failed.",
        outcomes.len(),
        outcomes.len() - failed,
        failed
    );

    let rendered = ui::render(args.output.format, &outcomes, true)?;
    super::emit(&rendered, args.output.output.as_deref())
}

/// Drops records shorter than `min_length` from the output.
fn apply_min_length(outcomes: Vec<BatchOutcome>, min_length: usize) -> Vec<BatchOutcome> {
    outcomes
        .into_iter()
        .filter(|outcome| match &outcome.result {
            Ok(report) if report.length() < min_length => {
                warn!(
                    "Skipping record '{}': {} residue(s), at least {} required.",
                    outcome.id,
                    report.length(),
                    min_length
                );
                false
            }
            Ok(report) => {
                super::warn_dropped(&outcome.id, report);
                true
            }
            Err(_) => true,
        })
        .collect()
}
