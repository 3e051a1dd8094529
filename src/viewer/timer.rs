//! Deadline timers driven by the host's frame clock.
//!
//! Neither timer spawns anything: the viewer polls them with the instant the
//! host passes to [`Viewer::update`](super::Viewer::update).

use web_time::{Duration, Instant};

/// Cancellable one-shot that re-enables auto after a quiet period.
///
/// At most one resume is pending. Arming again replaces the previous
/// deadline, so a burst of interactions resumes `delay` after the last one.
#[derive(Debug, Clone)]
pub struct ResumeTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl ResumeTimer {
    /// Timer that fires `delay` after being armed.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer relative to `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending resume.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a resume is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending resume fires, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Repeating interval for carousel auto-advance.
#[derive(Debug, Clone)]
pub struct AdvanceTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl AdvanceTimer {
    /// Stopped timer with the given interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Start (or restart) the interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Stop advancing.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Whether the interval is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when an advance is due and schedules the next one.
    ///
    /// A stalled host gets one advance, not a burst of catch-up advances.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
