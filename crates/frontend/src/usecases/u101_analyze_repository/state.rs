//! View state for the analyze page.
//!
//! Overlapping submissions are allowed and never cancelled: whichever
//! outcome is resolved last replaces the previous one, whatever order the
//! submissions were made in.

use contracts::usecases::u101_analyze_repository::{AnalysisResult, AnalyzeRequest};

use super::error::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Nothing submitted yet
    Idle,
    /// At least one request in flight
    Awaiting,
    Succeeded,
    Failed,
}

/// One submitted request, handed back to [`AnalysisState::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    seq: u64,
    repo_url: String,
}

impl Submission {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    pub fn request(&self) -> AnalyzeRequest {
        AnalyzeRequest::new(self.repo_url.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisState {
    result: Option<AnalysisResult>,
    error: Option<AnalysisError>,
    in_flight: usize,
    next_seq: u64,
    newest_resolved: Option<u64>,
}

impl AnalysisState {
    /// Register a submission of `repo_url`, taken verbatim.
    pub fn begin(&mut self, repo_url: String) -> Submission {
        self.next_seq += 1;
        self.in_flight += 1;
        let submission = Submission {
            seq: self.next_seq,
            repo_url,
        };
        log::info!(
            "analysis #{} submitted for {:?} ({} in flight)",
            submission.seq,
            submission.repo_url,
            self.in_flight
        );
        submission
    }

    /// Fold the outcome of `submission` into the state.
    ///
    /// A success replaces the result wholesale and clears the error.
    /// A failure keeps the last good result.
    pub fn resolve(
        &mut self,
        submission: Submission,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match self.newest_resolved {
            Some(newest) if newest > submission.seq => {
                log::debug!(
                    "analysis #{} resolved after #{}; its outcome wins",
                    submission.seq,
                    newest
                );
            }
            _ => self.newest_resolved = Some(submission.seq),
        }

        match outcome {
            Ok(result) => {
                log::debug!(
                    "analysis #{} succeeded: {}",
                    submission.seq,
                    result.score_line()
                );
                self.result = Some(result);
                self.error = None;
            }
            Err(error) => {
                log::warn!(
                    "analysis #{} for {:?} failed: {}",
                    submission.seq,
                    submission.repo_url,
                    error
                );
                self.error = Some(error);
            }
        }
    }

    pub fn phase(&self) -> AnalysisPhase {
        if self.in_flight > 0 {
            AnalysisPhase::Awaiting
        } else if self.error.is_some() {
            AnalysisPhase::Failed
        } else if self.result.is_some() {
            AnalysisPhase::Succeeded
        } else {
            AnalysisPhase::Idle
        }
    }

    /// Last successful result, kept across later failures.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Error to display; only set while the phase is `Failed`.
    pub fn visible_error(&self) -> Option<&AnalysisError> {
        match self.phase() {
            AnalysisPhase::Failed => self.error.as_ref(),
            _ => None,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
