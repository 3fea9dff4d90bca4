//! Frame clock
//!
//! Turns host timestamps (monotonic seconds) into a per-frame delta that is
//! clamped so a suspended tab cannot inject a huge gravity or scroll step.

/// Converts successive frame timestamps into bounded deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: f64,
    max_dt: f64,
}

impl FrameClock {
    /// Start a clock at `now` with the given maximum delta
    pub fn new(now: f64, max_dt: f64) -> Self {
        Self { last: now, max_dt }
    }

    /// Forget elapsed time (used on restart so the first frame is not a jump)
    pub fn reset(&mut self, now: f64) {
        self.last = now;
    }

    /// Elapsed seconds since the previous call, in `[0, max_dt]`
    pub fn delta(&mut self, now: f64) -> f32 {
        if !now.is_finite() {
            log::warn!("Ignoring non-finite frame timestamp {}", now);
            return 0.0;
        }
        let dt = (now - self.last).clamp(0.0, self.max_dt);
        // Never move backwards: a stale timestamp yields 0 and keeps the newer baseline
        self.last = self.last.max(now);
        dt as f32
    }

    pub fn last(&self) -> f64 {
        self.last
    }
}
