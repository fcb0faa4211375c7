use super::{emit, ensure_min_length, warn_dropped};
use crate::cli::FetchArgs;
use crate::config::build_config;
use crate::error::Result;
use crate::rcsb;
use crate::ui;
use protparam::workflows::{self, batch::BatchOutcome};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub async fn run(args: FetchArgs, config_path: Option<&Path>, set_values: &[String]) -> Result<()> {
    let app = build_config(config_path, set_values, &args.analysis)?;
    let pdb_id = rcsb::validate_pdb_id(&args.pdb_id)?;
    let timeout = args
        .timeout
        .map(Duration::from_secs)
        .unwrap_or(app.fetch_timeout);

    eprintln!("Fetching sequence for {} from RCSB PDB...", pdb_id);
    let sequence = rcsb::fetch_sequence(&pdb_id, timeout).await?;
    info!("Fetched {} characters of sequence for {}", sequence.len(), pdb_id);

    let report = workflows::analyze_with(&sequence, true, &app.analysis)?;
    warn_dropped(&pdb_id, &report);
    ensure_min_length(&report, app.min_length)?;

    let outcome = BatchOutcome {
        id: pdb_id,
        result: Ok(report),
    };
    let rendered = ui::render(args.output.format, std::slice::from_ref(&outcome), false)?;
    emit(&rendered, args.output.output.as_deref())
}
