// Processing lifecycle state - one job slot, Ready -> Processing -> Done
use crate::error::JobError;
use crate::models::{JobReport, ProcessingStatus};
use parking_lot::Mutex;
use std::sync::Arc;

/// Process-wide job slot. Holds the visible lifecycle phase and the report of
/// the most recent completed run.
pub struct JobState {
    status: Mutex<ProcessingStatus>,
    last_report: Mutex<Option<JobReport>>,
}

impl JobState {
    pub fn new() -> Self {
        Self {
            status: Mutex::new(ProcessingStatus::Ready),
            last_report: Mutex::new(None),
        }
    }

    pub fn status(&self) -> ProcessingStatus {
        *self.status.lock()
    }

    pub fn last_report(&self) -> Option<JobReport> {
        self.last_report.lock().clone()
    }

    /// Claims the job slot for one submission. Rejects while a job is in
    /// flight, and drops the previous report so a new run never shows output
    /// links from an older one.
    pub fn begin(self: &Arc<Self>) -> Result<FlightGuard, JobError> {
        let mut status = self.status.lock();
        if *status == ProcessingStatus::Processing {
            return Err(JobError::JobInProgress);
        }

        *status = ProcessingStatus::Processing;
        *self.last_report.lock() = None;

        Ok(FlightGuard {
            state: Arc::clone(self),
            completed: false,
        })
    }
}

impl Default for JobState {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped claim on the job slot. Completing stores the report and moves to
/// Done; dropping without completing (engine failure, decode failure) returns
/// the slot to Ready so the status can never stick at Processing.
pub struct FlightGuard {
    state: Arc<JobState>,
    completed: bool,
}

impl FlightGuard {
    pub fn complete(mut self, report: JobReport) {
        // Lock order matches begin(): status first, then the report
        let mut status = self.state.status.lock();
        *self.state.last_report.lock() = Some(report);
        *status = ProcessingStatus::Done;
        self.completed = true;
    }
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        if !self.completed {
            *self.state.status.lock() = ProcessingStatus::Ready;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> JobReport {
        JobReport {
            output_folder: "/photos/out".to_string(),
            processing_time: "0.42 seconds".to_string(),
            results: vec![],
        }
    }

    #[test]
    fn begin_moves_to_processing() {
        let state = Arc::new(JobState::new());
        let _guard = state.begin().unwrap();
        assert_eq!(state.status(), ProcessingStatus::Processing);
    }

    #[test]
    fn second_submission_is_rejected_while_in_flight() {
        let state = Arc::new(JobState::new());
        let _guard = state.begin().unwrap();
        assert_eq!(state.begin().err(), Some(JobError::JobInProgress));
    }

    #[test]
    fn completing_stores_report_and_moves_to_done() {
        let state = Arc::new(JobState::new());
        let guard = state.begin().unwrap();
        guard.complete(sample_report());

        assert_eq!(state.status(), ProcessingStatus::Done);
        assert!(state.last_report().is_some());
    }

    #[test]
    fn dropped_guard_returns_to_ready() {
        let state = Arc::new(JobState::new());
        {
            let _guard = state.begin().unwrap();
        }
        assert_eq!(state.status(), ProcessingStatus::Ready);
    }

    #[test]
    fn resubmission_after_done_clears_the_stale_report() {
        let state = Arc::new(JobState::new());
        state.begin().unwrap().complete(sample_report());
        assert!(state.last_report().is_some());

        let _guard = state.begin().unwrap();
        assert!(state.last_report().is_none());
        assert_eq!(state.status(), ProcessingStatus::Processing);
    }
}
