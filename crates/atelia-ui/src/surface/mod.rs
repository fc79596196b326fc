//! Host boundary
//!
//! The state machines never touch a page directly. They query geometry and
//! write scroll offsets, styles and image sources through these traits, which
//! a browser binding or the headless recorder implements.

pub mod headless;

use std::time::Duration;

pub use headless::{CarouselOp, HeadlessCarousel, HeadlessPage};

/// Window scroll position and document geometry
pub trait ScrollSurface {
    fn scroll_y(&self) -> f64;
    fn scroll_to(&mut self, y: f64);
    fn document_height(&self) -> f64;
    fn viewport_height(&self) -> f64;

    /// Largest reachable offset, recomputed from current layout
    fn max_scroll_y(&self) -> f64 {
        (self.document_height() - self.viewport_height()).max(0.0)
    }
}

/// Lookup of in-page link targets
pub trait AnchorLookup {
    /// Top of the element with `id` relative to the viewport
    fn anchor_top(&self, id: &str) -> Option<f64>;
    /// Rendered navbar height, 0 when absent or collapsed
    fn navbar_height(&self) -> f64;
}

/// CSS transition applied to the carousel grid
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub property: String,
    pub duration: Duration,
    pub easing: String,
}

impl Transition {
    pub fn css(&self) -> String {
        format!(
            "{} {}ms {}",
            self.property,
            self.duration.as_millis(),
            self.easing
        )
    }
}

/// A transition-end notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEnd {
    /// Id of the element the event was dispatched on
    pub target: String,
    /// Transitioned property, None when the host does not report it
    pub property: Option<String>,
}

impl TransitionEnd {
    pub fn new(target: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            property: Some(property.into()),
        }
    }
}

/// The carousel grid, its cards and its image slots
pub trait CarouselSurface {
    /// Width of one card, 0 when it cannot be measured
    fn card_width(&self) -> f64;
    fn column_gap(&self) -> f64;
    /// Set or clear (`None`) the grid transition
    fn set_transition(&mut self, transition: Option<&Transition>);
    fn set_translate_x(&mut self, px: f64);
    /// Force a synchronous layout so style writes are not batched
    fn flush_layout(&mut self);
    fn set_slot_source(&mut self, slot: usize, src: &str);
}
