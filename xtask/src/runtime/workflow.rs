//! Stage timing for multi-step xtask workflows.

use crate::runtime::error::XtaskResult;
use std::time::{Duration, Instant};

/// Shared stage runner.
///
/// Command families nest each user-visible step in [`run_timed_stage`](Self::run_timed_stage) so
/// progress and timing are reported in one format.
#[derive(Clone, Debug, Default)]
pub struct WorkflowRecorder;

impl WorkflowRecorder {
    /// Create a recorder service.
    pub fn new() -> Self {
        Self
    }

    /// Run one named stage, printing its outcome and duration.
    pub fn run_timed_stage<T, F>(&self, message: &str, action: F) -> XtaskResult<T>
    where
        F: FnOnce() -> XtaskResult<T>,
    {
        println!("\n==> {message}");
        let started = Instant::now();
        let result = action();
        let elapsed = format_duration(started.elapsed());
        match &result {
            Ok(_) => println!("    done in {elapsed}"),
            Err(_) => println!("    failed in {elapsed}"),
        }
        result
    }
}

/// Format a duration as `Xm Y.ZZZs` or `Y.ZZZs`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();
    if secs >= 60 {
        let minutes = secs / 60;
        let rem_secs = secs % 60;
        format!("{minutes}m {rem_secs}.{millis:03}s")
    } else {
        format!("{secs}.{millis:03}s")
    }
}
