//! L3 Molecular Layer: Scroll animation controller
//!
//! Each call site owns one `ScrollAnimator`. Starting an animation takes the
//! animator's single slot; whatever was in flight is dropped, and dropping it
//! closes its completion channel so the superseded caller never observes
//! completion.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::oneshot;
use tracing::debug;

use super::config::{ScrollConfig, ScrollProfile, ScrollProfileExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp, progress};
use crate::surface::ScrollSurface;

/// In-flight scroll animation state
#[derive(Debug)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Starting scroll position
    from: f64,
    /// Clamped target scroll position
    to: f64,
    duration: Duration,
    easing: EasingType,
    /// Fires once the final frame has been written
    done: oneshot::Sender<()>,
}

impl ActiveAnimation {
    fn position(&self, t: f64) -> f64 {
        lerp(self.from, self.to, self.easing.apply(t))
    }
}

/// The animation a completion signal belonged to was replaced by a newer one
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("scroll animation superseded")]
pub struct Superseded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionState {
    Pending,
    Completed,
    Superseded,
}

/// Completion signal of one `animate_scroll_to` call
///
/// Resolves `Ok(())` after the final frame. A superseded animation resolves
/// `Err(Superseded)`, so continuations chained on success never run for it.
#[derive(Debug)]
pub struct ScrollCompletion {
    rx: oneshot::Receiver<()>,
    settled: Option<Result<(), Superseded>>,
}

impl ScrollCompletion {
    fn new(rx: oneshot::Receiver<()>) -> Self {
        Self { rx, settled: None }
    }

    /// Non-blocking check of the signal
    pub fn state(&mut self) -> CompletionState {
        if self.settled.is_none() {
            match self.rx.try_recv() {
                Ok(()) => self.settled = Some(Ok(())),
                Err(oneshot::error::TryRecvError::Closed) => self.settled = Some(Err(Superseded)),
                Err(oneshot::error::TryRecvError::Empty) => {}
            }
        }

        match self.settled {
            None => CompletionState::Pending,
            Some(Ok(())) => CompletionState::Completed,
            Some(Err(Superseded)) => CompletionState::Superseded,
        }
    }
}

impl Future for ScrollCompletion {
    type Output = Result<(), Superseded>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(settled) = self.settled {
            return Poll::Ready(settled);
        }

        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(result) => {
                let settled = result.map_err(|_| Superseded);
                self.settled = Some(settled);
                Poll::Ready(settled)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Cancelable eased scroll animator
///
/// Call `animate_scroll_to()` to begin an animation, then `tick()` once per
/// display frame until it returns false.
#[derive(Debug)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    profile: ScrollProfile,
    easing: EasingType,
    /// Moves shorter than this are applied without animating
    epsilon: f64,
}

impl ScrollAnimator {
    pub fn new(config: &ScrollConfig, profile: ScrollProfile) -> Self {
        Self {
            animation: None,
            profile,
            easing: config.easing,
            epsilon: config.epsilon_px,
        }
    }

    /// Animator for in-page anchor links
    pub fn anchor(config: &ScrollConfig) -> Self {
        Self::new(config, config.anchor)
    }

    /// Animator for plan card links
    pub fn card(config: &ScrollConfig) -> Self {
        Self::new(config, config.card)
    }

    pub fn profile(&self) -> &ScrollProfile {
        &self.profile
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Clamped target of the in-flight animation
    pub fn target(&self) -> Option<f64> {
        self.animation.as_ref().map(|a| a.to)
    }

    /// Start animating the page towards `target_y`
    ///
    /// The target is clamped to the currently scrollable range. Any animation
    /// already owned by this animator is canceled first. When the clamped
    /// distance is below epsilon the page jumps and the returned signal is
    /// already completed.
    pub fn animate_scroll_to<S: ScrollSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        target_y: f64,
        duration: Option<Duration>,
        now: Instant,
    ) -> ScrollCompletion {
        self.cancel();

        let from = surface.scroll_y();
        let max_y = surface.max_scroll_y();
        let to = if target_y.is_finite() {
            target_y.clamp(0.0, max_y)
        } else {
            from.clamp(0.0, max_y)
        };

        let (done, rx) = oneshot::channel();
        let completion = ScrollCompletion::new(rx);

        if (to - from).abs() < self.epsilon {
            surface.scroll_to(to);
            let _ = done.send(());
            return completion;
        }

        let duration = self.profile.effective_duration(duration);
        debug!(from, to, duration_ms = duration.as_millis() as u64, "Starting scroll animation");

        self.animation = Some(ActiveAnimation {
            start: now,
            from,
            to,
            duration,
            easing: self.easing,
            done,
        });

        completion
    }

    /// Advance the animation to frame time `now`
    ///
    /// Writes the eased position and returns whether another frame is needed.
    pub fn tick<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S, now: Instant) -> bool {
        let Some(anim) = self.animation.take() else {
            return false;
        };

        let t = progress(anim.start, now, anim.duration);
        surface.scroll_to(anim.position(t));

        if t >= 1.0 {
            let _ = anim.done.send(());
            false
        } else {
            self.animation = Some(anim);
            true
        }
    }

    /// Position the in-flight animation would write at frame time `now`
    pub fn position_at(&self, now: Instant) -> Option<f64> {
        self.animation
            .as_ref()
            .map(|anim| anim.position(progress(anim.start, now, anim.duration)))
    }

    /// Drop the in-flight animation, leaving the page where it is
    ///
    /// Returns true when an animation was canceled.
    pub fn cancel(&mut self) -> bool {
        match self.animation.take() {
            Some(anim) => {
                debug!(to = anim.to, "Canceling scroll animation");
                true
            }
            None => false,
        }
    }
}
