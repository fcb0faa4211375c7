/// Events emitted while a batch of sequences is analyzed.
#[derive(Debug, Clone)]
pub enum Progress {
    BatchStart { total_records: u64 },
    RecordFinished { id: String, succeeded: bool },
    BatchFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback.
///
/// Records finish on rayon worker threads, so the callback must be
/// `Send + Sync`; events from different records may arrive in any order.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::BatchFinish);
    }

    #[test]
    fn reporter_forwards_events_to_callback() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            seen.lock().unwrap().push(format!("{event:?}"));
        }));
        reporter.report(Progress::BatchStart { total_records: 2 });
        reporter.report(Progress::RecordFinished {
            id: "sp|P1".to_string(),
            succeeded: true,
        });
        drop(reporter);

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains("BatchStart"));
        assert!(seen[1].contains("sp|P1"));
    }
}
