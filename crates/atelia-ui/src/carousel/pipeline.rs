use std::sync::Arc;
use std::time::Duration;

use atelia_core::media::settle_all;
use atelia_core::{CarouselConfig, ImageCache, ImageDecoder, Result};
use futures::future::{BoxFuture, FutureExt, Shared};
use tracing::{debug, info};

use super::window::CarouselWindow;
use crate::surface::{CarouselSurface, Transition, TransitionEnd};

/// Settles once every image of the upcoming window has decoded or failed
pub type SettleSignal = Shared<BoxFuture<'static, ()>>;

/// Observable phase of the advance pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// Ready to advance
    Idle,
    /// Grid is transitioning towards the next window
    Sliding,
    /// Slide finished; waiting for decodes before swapping sources
    Swapping,
}

enum Phase {
    Idle,
    Sliding { next_start: usize, ready: SettleSignal },
    Swapping { next_start: usize, ready: SettleSignal },
}

/// Advance pipeline for one carousel grid
///
/// Only one step runs at a time. `advance` calls arriving while a step is
/// in progress are dropped.
///
/// `init`, `advance` and `finish_swap` start decodes through
/// [`ImageCache::preload`], which spawns Tokio tasks: call them from within
/// a Tokio runtime or they panic.
pub struct CarouselPipeline {
    window: CarouselWindow,
    sources: Vec<String>,
    cache: ImageCache,
    grid_id: String,
    transition: Transition,
    phase: Phase,
}

impl CarouselPipeline {
    pub fn new(config: &CarouselConfig, decoder: Arc<dyn ImageDecoder>) -> Result<Self> {
        let window = CarouselWindow::new(config.sources.len(), config.visible)?;

        Ok(Self {
            window,
            sources: config.sources.clone(),
            cache: ImageCache::new(decoder),
            grid_id: config.grid_id.clone(),
            transition: Transition {
                property: "transform".to_string(),
                duration: Duration::from_millis(config.transition_ms),
                easing: config.transition_easing.clone(),
            },
            phase: Phase::Idle,
        })
    }

    pub fn window(&self) -> &CarouselWindow {
        &self.window
    }

    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    pub fn phase(&self) -> CarouselPhase {
        match self.phase {
            Phase::Idle => CarouselPhase::Idle,
            Phase::Sliding { .. } => CarouselPhase::Sliding,
            Phase::Swapping { .. } => CarouselPhase::Swapping,
        }
    }

    /// Source of the 1-based image `index`
    pub fn src_for(&self, index: usize) -> &str {
        &self.sources[self.window.normalize(index) - 1]
    }

    pub fn visible_sources(&self) -> Vec<&str> {
        self.window
            .indices()
            .into_iter()
            .map(|index| self.src_for(index))
            .collect()
    }

    /// Notification a host should report once the slide transition ends
    pub fn expected_transition_end(&self) -> TransitionEnd {
        TransitionEnd::new(self.grid_id.clone(), self.transition.property.clone())
    }

    /// Render the first window and warm the cache with every image
    ///
    /// # Panics
    /// Outside a Tokio runtime, since every preload spawns a decode task.
    pub fn init<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S) {
        self.render(surface);
        for src in &self.sources {
            self.cache.preload(src);
        }
        info!(
            images = self.sources.len(),
            visible = self.window.visible(),
            "Carousel initialized"
        );
    }

    /// Start sliding towards the next window
    ///
    /// Returns false when a step is already in progress.
    ///
    /// # Panics
    /// Outside a Tokio runtime when the upcoming window has uncached images.
    pub fn advance<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !matches!(self.phase, Phase::Idle) {
            debug!(phase = ?self.phase(), "Carousel busy, dropping advance");
            return false;
        }

        let next_start = self.window.next_start();
        let signals = self
            .window
            .indices_from(next_start)
            .into_iter()
            .map(|index| {
                let src = &self.sources[index - 1];
                self.cache.preload(src)
            })
            .collect();
        let ready = settle_all(signals).map(|_| ()).boxed().shared();

        let shift = slide_shift(&*surface);
        if shift <= 0.0 {
            // Nothing would transition, so no transition-end will arrive.
            debug!("Carousel layout not measurable, swapping without slide");
            surface.set_transition(None);
            self.phase = Phase::Swapping { next_start, ready };
            return true;
        }

        surface.set_transition(Some(&self.transition));
        surface.set_translate_x(-shift);
        self.phase = Phase::Sliding { next_start, ready };
        true
    }

    /// Handle a transition-end notification from the host
    ///
    /// Only the grid's own transform transition counts; anything else is
    /// ignored. Returns true when the pipeline moved to swapping.
    pub fn on_transition_end<S: CarouselSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        event: &TransitionEnd,
    ) -> bool {
        if event.target != self.grid_id {
            return false;
        }
        if let Some(property) = &event.property {
            if *property != self.transition.property {
                return false;
            }
        }

        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Sliding { next_start, ready } => {
                surface.set_transition(None);
                self.phase = Phase::Swapping { next_start, ready };
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Signal to await before `finish_swap`, present only while swapping
    pub fn settle_signal(&self) -> Option<SettleSignal> {
        match &self.phase {
            Phase::Swapping { ready, .. } => Some(ready.clone()),
            _ => None,
        }
    }

    /// Swap sources and snap back, once the upcoming images have settled
    ///
    /// Safe to call from a frame callback: the settle signal is polled here,
    /// so nothing else has to await it. Returns false when not swapping or
    /// when decodes are still pending.
    pub fn finish_swap<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Swapping { next_start, ready } if ready.clone().now_or_never().is_some() => {
                self.window.set_start(next_start);
                self.render(surface);

                surface.set_translate_x(0.0);
                surface.flush_layout();

                for index in self.window.indices() {
                    self.cache.redecode(&self.sources[index - 1]);
                }

                debug!(start = next_start, "Carousel advanced");
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Await the settle signal, then swap
    pub async fn complete_swap<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        let Some(ready) = self.settle_signal() else {
            return false;
        };
        ready.await;
        self.finish_swap(surface)
    }

    fn render<S: CarouselSurface + ?Sized>(&self, surface: &mut S) {
        for (slot, index) in self.window.indices().into_iter().enumerate() {
            surface.set_slot_source(slot, &self.sources[index - 1]);
        }
    }
}

/// Pixel distance of one slot, 0 when the card cannot be measured
fn slide_shift<S: CarouselSurface + ?Sized>(surface: &S) -> f64 {
    let width = surface.card_width();
    if !width.is_finite() || width <= 0.0 {
        return 0.0;
    }
    let gap = surface.column_gap();
    let gap = if gap.is_finite() && gap > 0.0 { gap } else { 0.0 };
    width + gap
}
