//! Score model
//!
//! Score grows with time at `base_rate * multiplier`. Pumps raise the
//! multiplier; it collapses back to 1 in one step when the countdown runs out.

use serde::Serialize;

use crate::config::MultiplierPolicy;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreState {
    /// Exact accumulated score (display truncates)
    pub score: f64,
    /// Current multiplier, always >= 1
    pub multiplier: u32,
    /// Seconds left at the current multiplier
    pub countdown: f32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0.0,
            multiplier: 1,
            countdown: 0.0,
        }
    }
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one collected pump
    pub fn collect(&mut self, policy: MultiplierPolicy, duration: f32) {
        self.multiplier = policy.apply(self.multiplier).max(1);
        self.countdown = duration;
    }

    /// Run down the multiplier countdown. Returns true if the multiplier expired.
    pub fn decay(&mut self, dt: f32) -> bool {
        if self.multiplier <= 1 {
            return false;
        }
        self.countdown -= dt;
        if self.countdown <= 0.0 {
            self.multiplier = 1;
            self.countdown = 0.0;
            return true;
        }
        false
    }

    /// Accrue score for `dt` seconds
    pub fn accrue(&mut self, base_rate: f64, dt: f32) {
        self.score += base_rate * self.multiplier as f64 * dt as f64;
    }

    /// Score rate in points per second
    pub fn rate(&self, base_rate: f64) -> f64 {
        base_rate * self.multiplier as f64
    }

    /// Integer score for display
    pub fn truncated(&self) -> u64 {
        self.score.floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacking_resets_countdown() {
        let mut score = ScoreState::new();
        score.collect(MultiplierPolicy::Stack, 10.0);
        score.decay(4.0);
        assert_eq!(score.multiplier, 2);
        assert!((score.countdown - 6.0).abs() < 1e-6);

        score.collect(MultiplierPolicy::Stack, 10.0);
        score.collect(MultiplierPolicy::Stack, 10.0);
        assert_eq!(score.multiplier, 4);
        assert_eq!(score.countdown, 10.0);
    }

    #[test]
    fn test_fixed_policy() {
        let mut score = ScoreState::new();
        for _ in 0..3 {
            score.collect(MultiplierPolicy::Fixed(2), 10.0);
        }
        assert_eq!(score.multiplier, 2);
    }

    #[test]
    fn test_single_tier_collapse() {
        let mut score = ScoreState::new();
        for _ in 0..4 {
            score.collect(MultiplierPolicy::Stack, 10.0);
        }
        assert_eq!(score.multiplier, 5);
        assert!(!score.decay(9.99));
        assert_eq!(score.multiplier, 5);
        assert!(score.decay(0.02));
        assert_eq!(score.multiplier, 1);
    }

    #[test]
    fn test_decay_at_multiplier_one_is_noop() {
        let mut score = ScoreState::new();
        assert!(!score.decay(1.0));
        assert_eq!(score.countdown, 0.0);
    }

    #[test]
    fn test_accrue_and_truncate() {
        let mut score = ScoreState::new();
        score.accrue(60.0, 0.5);
        assert!((score.score - 30.0).abs() < 1e-9);
        score.collect(MultiplierPolicy::Stack, 10.0);
        score.accrue(60.0, 0.25);
        assert!((score.score - 60.0).abs() < 1e-9);
        assert_eq!(score.rate(60.0), 120.0);
        score.score = 59.99;
        assert_eq!(score.truncated(), 59);
    }
}
