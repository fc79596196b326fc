//! Smooth scrolling for in-page navigation
//!
//! # Layers
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic in/out, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Configuration types and duration policy (re-exported from atelia-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Cancelable animator combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use atelia_ui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::anchor(&config.scroll);
//! let mut done = animator.animate_scroll_to(&mut page, 1200.0, None, Instant::now());
//!
//! // Once per display frame
//! while animator.tick(&mut page, frame_time) { /* ... */ }
//! assert_eq!(done.state(), CompletionState::Completed);
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::{CompletionState, ScrollAnimator, ScrollCompletion, Superseded};
pub use config::{ScrollConfig, ScrollConfigExt, ScrollProfile, ScrollProfileExt};
pub use easing::{EasingType, EasingTypeExt};
