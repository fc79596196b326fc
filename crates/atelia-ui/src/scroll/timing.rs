//! L4 Atomic Layer: Time calculation utilities for scroll animations
//!
//! Frame timestamps are passed in explicitly so animations can be replayed
//! against a synthetic clock.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at frame time `now`
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(100.0, 0.0, 0.25) - 75.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamps_both_ends() {
        let start = Instant::now();
        let duration = Duration::from_millis(400);
        assert_eq!(progress(start + Duration::from_millis(800), start, duration), 0.0);
        assert!((progress(start, start + Duration::from_millis(100), duration) - 0.25).abs() < 1e-9);
        assert_eq!(progress(start, start + Duration::from_secs(2), duration), 1.0);
    }
}
