//! Frame clock for render loops and headless runs.

use web_time::{Duration, Instant};

/// Frame timing with delta computation, FPS smoothing and optional frame
/// limiting.
///
/// Instants are supplied by the caller, so the same clock drives a real
/// render loop and a fixed-step headless run.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Previous frame timestamp
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: None,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Nominal frame duration (zero when unlimited).
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        self.min_frame_duration
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame
            .is_none_or(|last| now.saturating_duration_since(last) >= self.min_frame_duration)
    }

    /// Mark the start of a frame at `now` and return the elapsed seconds
    /// since the previous one. The first frame reports the nominal frame
    /// duration.
    pub fn begin_frame(&mut self, now: Instant) -> f32 {
        let dt = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => self.min_frame_duration.as_secs_f32(),
        };
        self.last_frame = Some(now);

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
