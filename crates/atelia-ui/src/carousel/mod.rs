//! Double-buffered image carousel
//!
//! A circular sequence of images viewed through a fixed number of slots.
//! Advancing slides the grid by one card, waits for the next window's images
//! to settle, then swaps sources and snaps the grid back in one
//! transitionless frame.

pub mod pipeline;
pub mod window;

pub use pipeline::{CarouselPhase, CarouselPipeline, SettleSignal};
pub use window::CarouselWindow;
