//! L4 Atomic Layer: Easing curves for scroll progress
//!
//! Both curves map [0, 1] onto [0, 1] and are monotonic.

pub use atelia_core::EasingType;

pub trait EasingTypeExt {
    /// Eased value for progress `t`, clamped to [0, 1] first
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::CubicIn => t * t * t,
        }
    }
}
