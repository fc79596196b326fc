//! Smooth in-page link navigation
//!
//! Anchor links and plan cards each own a `LinkNavigator`, and with it a
//! separate animator, so a click on one kind only supersedes animations
//! started by the same kind.

use std::time::Instant;

use tracing::debug;

use crate::scroll::{
    CompletionState, ScrollAnimator, ScrollCompletion, ScrollConfig, ScrollConfigExt,
    ScrollProfileExt,
};
use crate::surface::{AnchorLookup, ScrollSurface};

/// Result of handling a link click
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Not an in-page link or no such target; the default action proceeds
    Ignored,
    /// Scrolled without animation, push `href` to history now
    PushHistory(String),
    /// Animation started, history is pushed from `on_frame` when it completes
    Animating { target_y: f64 },
}

#[derive(Debug)]
struct PendingEntry {
    href: String,
    completion: ScrollCompletion,
}

#[derive(Debug)]
pub struct LinkNavigator {
    animator: ScrollAnimator,
    smooth: bool,
    navbar_clearance: f64,
    landing_padding: f64,
    pending: Option<PendingEntry>,
}

impl LinkNavigator {
    /// Navigator for `a[href^="#"]` anchors
    pub fn anchors(config: &ScrollConfig) -> Self {
        Self::with_animator(config, ScrollAnimator::anchor(config))
    }

    /// Navigator for plan cards linking into the page
    pub fn cards(config: &ScrollConfig) -> Self {
        Self::with_animator(config, ScrollAnimator::card(config))
    }

    fn with_animator(config: &ScrollConfig, animator: ScrollAnimator) -> Self {
        Self {
            animator,
            smooth: config.is_smooth(),
            navbar_clearance: config.navbar_clearance_px,
            landing_padding: 0.0,
            pending: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Space reserved for the fixed navbar above a landed target
    pub fn navbar_offset(&self, navbar_height: f64) -> f64 {
        if navbar_height > 0.0 {
            (navbar_height + self.navbar_clearance).ceil()
        } else {
            0.0
        }
    }

    pub fn handle_click<S>(&mut self, surface: &mut S, href: &str, now: Instant) -> ClickOutcome
    where
        S: ScrollSurface + AnchorLookup + ?Sized,
    {
        let Some(id) = fragment_id(href) else {
            return ClickOutcome::Ignored;
        };
        let Some(top) = surface.anchor_top(id) else {
            debug!(href, "No element for in-page link");
            return ClickOutcome::Ignored;
        };

        let target_y = surface.scroll_y() + top - self.navbar_offset(surface.navbar_height())
            + self.landing_padding;

        if !self.smooth {
            self.animator.cancel();
            self.pending = None;
            surface.scroll_to(target_y);
            return ClickOutcome::PushHistory(href.to_string());
        }

        let duration = self.animator.profile().click_duration();
        let mut completion = self
            .animator
            .animate_scroll_to(surface, target_y, Some(duration), now);

        if completion.state() == CompletionState::Completed {
            self.pending = None;
            return ClickOutcome::PushHistory(href.to_string());
        }

        // Replacing the entry drops the superseded completion with it.
        self.pending = Some(PendingEntry {
            href: href.to_string(),
            completion,
        });
        ClickOutcome::Animating {
            target_y: self.animator.target().unwrap_or(target_y),
        }
    }

    /// Advance the animation; returns the href to push once it completes
    pub fn on_frame<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S, now: Instant) -> Option<String> {
        self.animator.tick(surface, now);

        let entry = self.pending.as_mut()?;
        match entry.completion.state() {
            CompletionState::Pending => None,
            CompletionState::Completed => self.pending.take().map(|entry| entry.href),
            CompletionState::Superseded => {
                self.pending = None;
                None
            }
        }
    }
}

/// Id named by an in-page href, None for anything else
fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessPage;
    use std::time::Duration;

    fn page() -> HeadlessPage {
        HeadlessPage::new(6000.0, 1000.0)
            .with_navbar(64.5)
            .with_anchor("plans", 2400.0)
            .with_anchor("contact", 5800.0)
            .with_anchor("top", 40.0)
    }

    fn finish(nav: &mut LinkNavigator, page: &mut HeadlessPage, start: Instant) -> Vec<String> {
        let mut pushed = Vec::new();
        for frame in 1..200 {
            if let Some(href) = nav.on_frame(page, start + Duration::from_millis(16 * frame)) {
                pushed.push(href);
            }
        }
        pushed
    }

    #[test]
    fn test_fragment_parsing() {
        assert_eq!(fragment_id("#plans"), Some("plans"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/about.html"), None);
    }

    #[test]
    fn test_navbar_offset_rounds_up() {
        let nav = LinkNavigator::anchors(&ScrollConfig::default());
        assert_eq!(nav.navbar_offset(64.5), 77.0);
        assert_eq!(nav.navbar_offset(0.0), 0.0);
    }

    #[test]
    fn test_unknown_target_is_ignored() {
        let mut nav = LinkNavigator::anchors(&ScrollConfig::default());
        let mut page = page();
        assert_eq!(nav.handle_click(&mut page, "#nowhere", Instant::now()), ClickOutcome::Ignored);
        assert_eq!(nav.handle_click(&mut page, "#", Instant::now()), ClickOutcome::Ignored);
        assert!(page.scroll_writes().is_empty());
    }

    #[test]
    fn test_history_pushed_after_animation() {
        let mut nav = LinkNavigator::anchors(&ScrollConfig::default());
        let mut page = page();
        let start = Instant::now();

        let outcome = nav.handle_click(&mut page, "#plans", start);
        assert_eq!(outcome, ClickOutcome::Animating { target_y: 2323.0 });

        assert_eq!(finish(&mut nav, &mut page, start), vec!["#plans".to_string()]);
        assert_eq!(page.scroll_y(), 2323.0);
    }

    #[test]
    fn test_superseded_click_never_pushes() {
        let mut nav = LinkNavigator::cards(&ScrollConfig::default());
        let mut page = page();
        let start = Instant::now();

        nav.handle_click(&mut page, "#contact", start);
        nav.on_frame(&mut page, start + Duration::from_millis(100));
        nav.handle_click(&mut page, "#plans", start + Duration::from_millis(100));

        let pushed = finish(&mut nav, &mut page, start + Duration::from_millis(100));
        assert_eq!(pushed, vec!["#plans".to_string()]);
    }

    #[test]
    fn test_reduced_motion_jumps() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut nav = LinkNavigator::anchors(&config);
        let mut page = page();

        let outcome = nav.handle_click(&mut page, "#contact", Instant::now());
        assert_eq!(outcome, ClickOutcome::PushHistory("#contact".to_string()));
        assert_eq!(page.scroll_writes(), &[5723.0]);
    }

    #[test]
    fn test_already_there_pushes_immediately() {
        let mut nav = LinkNavigator::anchors(&ScrollConfig::default());
        let mut page = page();

        // Target lands above the top and clamps to the current offset 0
        let outcome = nav.handle_click(&mut page, "#top", Instant::now());
        assert_eq!(outcome, ClickOutcome::PushHistory("#top".to_string()));
        assert!(!nav.is_animating());
    }

    #[test]
    fn test_call_sites_do_not_cancel_each_other() {
        let config = ScrollConfig::default();
        let mut anchors = LinkNavigator::anchors(&config);
        let mut cards = LinkNavigator::cards(&config);
        let mut page = page();
        let start = Instant::now();

        anchors.handle_click(&mut page, "#plans", start);
        cards.handle_click(&mut page, "#contact", start);

        assert!(anchors.is_animating());
        assert!(cards.is_animating());
    }
}
