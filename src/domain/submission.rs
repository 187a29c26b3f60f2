// SPDX-License-Identifier: MPL-2.0
//! Submission lifecycle shared by the contact form and the signup modal.

use std::time::{Duration, Instant};

/// Simulated network latency for a form submission.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// How long the contact form shows its success state before resetting.
pub const CONTACT_SUCCESS_HOLD: Duration = Duration::from_secs(3);

/// How long the signup modal stays open after a successful signup.
pub const SIGNUP_SUCCESS_HOLD: Duration = Duration::from_secs(1);

/// Where a form currently is in its submit lifecycle.
///
/// Transitions are linear: `Idle -> Submitting -> Success | Failed`, then
/// back to `Idle` once the success hold elapses or the user edits again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

impl SubmitStatus {
    /// Whether a new submission may start from this state.
    ///
    /// Re-entrancy guard: pressing submit while a request is in flight,
    /// or while the success state is still displayed, is a no-op.
    #[must_use]
    pub fn can_submit(self) -> bool {
        matches!(self, SubmitStatus::Idle | SubmitStatus::Failed)
    }

    /// Whether the form's inputs should be disabled.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, SubmitStatus::Submitting | SubmitStatus::Success)
    }
}

/// Tracks a submit lifecycle together with the instant the terminal
/// state was entered, so the periodic tick can expire success holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Submission {
    status: SubmitStatus,
    finished_at: Option<Instant>,
}

impl Submission {
    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Starts a submission. Returns `false` when one is already running
    /// or the success state has not expired yet.
    pub fn begin(&mut self) -> bool {
        if !self.status.can_submit() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        self.finished_at = None;
        true
    }

    /// Records the outcome of an in-flight submission.
    ///
    /// Ignored unless the state is `Submitting`, so a stale completion
    /// cannot clobber a form the user has already reset.
    pub fn finish(&mut self, success: bool) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        self.status = if success {
            SubmitStatus::Success
        } else {
            SubmitStatus::Failed
        };
        self.finished_at = Some(Instant::now());
    }

    /// Returns to `Idle`, e.g. when the user edits a field after a
    /// failed attempt.
    pub fn reset(&mut self) {
        self.status = SubmitStatus::Idle;
        self.finished_at = None;
    }

    /// Shift the finish instant into the past so tests can expire a
    /// hold without sleeping.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        if let Some(at) = self.finished_at.as_mut() {
            *at -= by;
        }
    }

    /// Expires a `Success` state older than `hold`, returning `true`
    /// when the transition back to `Idle` happened on this call.
    pub fn expire_success(&mut self, hold: Duration) -> bool {
        if self.status != SubmitStatus::Success {
            return false;
        }
        match self.finished_at {
            Some(at) if at.elapsed() >= hold => {
                self.reset();
                true
            }
            _ => false,
        }
    }
}
