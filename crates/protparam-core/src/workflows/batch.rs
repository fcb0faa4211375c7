use super::analyze::analyze_with;
use super::report::PropertyReport;
use crate::engine::config::AnalysisConfig;
use crate::engine::error::AnalysisError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use tracing::{info, instrument, warn};

/// One named input to a batch analysis, typically a FASTA record whose
/// header has already been split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub text: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub id: String,
    pub result: Result<PropertyReport, AnalysisError>,
}

/// Analyzes every record in parallel.
///
/// Record texts are treated as residue content (no header detection). A
/// failing record does not stop the batch; its error is returned in place.
/// Outcomes are in the same order as `records`.
#[instrument(skip_all, name = "batch_workflow", fields(records = records.len()))]
pub fn run(
    records: &[SequenceRecord],
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Vec<BatchOutcome> {
    reporter.report(Progress::BatchStart {
        total_records: records.len() as u64,
    });
    info!("Analyzing {} record(s).", records.len());

    let outcomes: Vec<BatchOutcome> = records
        .par_iter()
        .map(|record| {
            let result = analyze_with(&record.text, true, config);
            if let Err(e) = &result {
                warn!(id = %record.id, "Record could not be analyzed: {}", e);
            }
            reporter.report(Progress::RecordFinished {
                id: record.id.clone(),
                succeeded: result.is_ok(),
            });
            BatchOutcome {
                id: record.id.clone(),
                result,
            }
        })
        .collect();

    reporter.report(Progress::BatchFinish);
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn records() -> Vec<SequenceRecord> {
        vec![
            SequenceRecord::new("ubiquitin", "MQIFVKTLTGKTITLEVEPSDTIENVKAKIQDKEGIPPDQQRLIFAGKQLEDGRTLSDYNIQKESTLHLVLRLRGG"),
            SequenceRecord::new("junk", "1234-5678"),
            SequenceRecord::new("cys", "C"),
        ]
    }

    #[test]
    fn outcomes_preserve_input_order_and_isolate_failures() {
        let outcomes = run(&records(), &AnalysisConfig::default(), &ProgressReporter::new());
        let ids: Vec<_> = outcomes.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ubiquitin", "junk", "cys"]);
        assert_eq!(outcomes[0].result.as_ref().unwrap().length(), 76);
        assert!(matches!(
            outcomes[1].result,
            Err(AnalysisError::EmptySequence)
        ));
        assert!(outcomes[2].result.is_ok());
    }

    #[test]
    fn batch_results_match_single_analyses() {
        let config = AnalysisConfig::default();
        let outcomes = run(&records(), &config, &ProgressReporter::new());
        let single = analyze_with(&records()[0].text, true, &config).unwrap();
        assert_eq!(outcomes[0].result.as_ref().unwrap(), &single);
    }

    #[test]
    fn progress_is_reported_for_every_record() {
        let finished = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);
        let started = AtomicUsize::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
            Progress::BatchStart { total_records } => {
                started.store(total_records as usize, Ordering::SeqCst);
            }
            Progress::RecordFinished { succeeded, .. } => {
                finished.fetch_add(1, Ordering::SeqCst);
                if !succeeded {
                    failed.fetch_add(1, Ordering::SeqCst);
                }
            }
            Progress::BatchFinish => {}
        }));

        run(&records(), &AnalysisConfig::default(), &reporter);

        assert_eq!(started.load(Ordering::SeqCst), 3);
        assert_eq!(finished.load(Ordering::SeqCst), 3);
        assert_eq!(failed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_batch_returns_no_outcomes() {
        let outcomes = run(&[], &AnalysisConfig::default(), &ProgressReporter::new());
        assert!(outcomes.is_empty());
    }
}
