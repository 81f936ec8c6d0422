#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
    Warning(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

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

    /// Runs `task` between a `PhaseStart`/`PhaseFinish` pair, finishing the phase even
    /// when the task returns an error.
    pub fn phase<T>(&self, name: &'static str, task: impl FnOnce() -> T) -> T {
        self.report(Progress::PhaseStart { name });
        let result = task();
        self.report(Progress::PhaseFinish);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_reporter() -> (ProgressReporter<'static>, Arc<Mutex<Vec<String>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |p: Progress| {
            sink.lock().unwrap().push(format!("{:?}", p));
        }));
        (reporter, events)
    }

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::TaskIncrement);
        assert_eq!(reporter.phase("noop", || 5), 5);
    }

    #[test]
    fn phase_wraps_task_with_start_and_finish_events() {
        let (reporter, events) = recording_reporter();
        let value = reporter.phase("Computing", || {
            reporter.report(Progress::Message("inside".to_string()));
            42
        });
        assert_eq!(value, 42);
        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                "PhaseStart { name: \"Computing\" }".to_string(),
                "Message(\"inside\")".to_string(),
                "PhaseFinish".to_string(),
            ]
        );
    }

    #[test]
    fn phase_finishes_even_when_task_fails() {
        let (reporter, events) = recording_reporter();
        let result: Result<(), &str> = reporter.phase("Failing", || Err("boom"));
        assert!(result.is_err());
        assert_eq!(events.lock().unwrap().last().unwrap(), "PhaseFinish");
    }
}
