//! L4 Atomic Layer: Configuration types for smooth scrolling
//!
//! Re-exports configuration from atelia-core and provides additional utilities.

use std::time::Duration;

pub use atelia_core::{EasingType, ScrollConfig, ScrollProfile};

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Interval between replayed animation frames
    fn frame_interval(&self) -> Duration;

    /// Check if smooth scrolling is enabled
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn frame_interval(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_secs_f64(1.0 / self.animation_fps as f64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled
    }
}

/// Duration policy of a scroll call site
pub trait ScrollProfileExt {
    /// Requested duration (or the default when absent or zero), floored to the minimum
    fn effective_duration(&self, requested: Option<Duration>) -> Duration;

    fn click_duration(&self) -> Duration;
}

impl ScrollProfileExt for ScrollProfile {
    fn effective_duration(&self, requested: Option<Duration>) -> Duration {
        let requested = requested
            .filter(|d| !d.is_zero())
            .unwrap_or(Duration::from_millis(self.default_duration_ms));
        requested.max(Duration::from_millis(self.min_duration_ms))
    }

    #[inline]
    fn click_duration(&self) -> Duration {
        Duration::from_millis(self.click_duration_ms)
    }
}
