//! Request lifecycle and copy-feedback state.
//!
//! [`RequestStatus`] is the orchestrator's only state machine.  The UI reads
//! it to decide whether the submit button is enabled and whether to show the
//! spinner.
//!
//! [`CopyFeedback`] is the transient "Copiado" flag.  It is a deadline rather
//! than a timer thread: the UI polls it every frame, so it never blocks or
//! gates anything else.

use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// States of a correction request.
///
/// ```text
/// Idle ──submit──▶ InFlight ──corrected──▶ Succeeded
///                           ──rejected / failed──▶ Failed
/// Succeeded / Failed ──submit──▶ InFlight
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// No request has been made yet.
    #[default]
    Idle,

    /// A request is on the wire; submit is disabled.
    InFlight,

    /// The last request returned a corrected text.
    Succeeded,

    /// The last request was rejected or failed in transport.
    Failed,
}

impl RequestStatus {
    /// Returns `true` while a request is outstanding.
    ///
    /// ```
    /// use text_corrector::orchestrator::RequestStatus;
    ///
    /// assert!(!RequestStatus::Idle.is_busy());
    /// assert!(RequestStatus::InFlight.is_busy());
    /// assert!(!RequestStatus::Succeeded.is_busy());
    /// assert!(!RequestStatus::Failed.is_busy());
    /// ```
    pub fn is_busy(&self) -> bool {
        matches!(self, RequestStatus::InFlight)
    }

    /// A short label for logs and the status line.
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Idle => "Idle",
            RequestStatus::InFlight => "Correcting",
            RequestStatus::Succeeded => "Done",
            RequestStatus::Failed => "Error",
        }
    }
}

// ---------------------------------------------------------------------------
// CopyFeedback
// ---------------------------------------------------------------------------

/// How long the copy button keeps showing "Copiado".
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Deadline-based "just copied" flag.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    shown_until: Option<Instant>,
    hold: Duration,
}

impl CopyFeedback {
    pub fn new(hold: Duration) -> Self {
        Self {
            shown_until: None,
            hold,
        }
    }

    /// Turn the flag on at `now`; re-arming restarts the countdown.
    pub fn arm(&mut self, now: Instant) {
        self.shown_until = Some(now + self.hold);
    }

    /// Whether the flag is on at `now`.
    pub fn is_shown(&self, now: Instant) -> bool {
        self.shown_until.is_some_and(|until| now < until)
    }

    /// Time left before the flag resets, `None` when it is off.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.shown_until
            .filter(|until| now < *until)
            .map(|until| until - now)
    }

    /// Clear the deadline once it has passed.
    pub fn tick(&mut self, now: Instant) {
        if !self.is_shown(now) {
            self.shown_until = None;
        }
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK_DURATION)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
