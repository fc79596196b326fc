//! Explicitly constructed controllers for one page
//!
//! Every controller is optional: when the page lacks the elements it attaches
//! to, the slot stays `None` and events for it are dropped.

use std::sync::Arc;
use std::time::Instant;

use atelia_core::{AppConfig, ImageDecoder, Result};
use tracing::debug;

use crate::carousel::CarouselPipeline;
use crate::navbar::{NavbarController, Visibility};
use crate::navigation::{ClickOutcome, LinkNavigator};
use crate::surface::{AnchorLookup, ScrollSurface};
use crate::widgets::{BackToTop, MobileMenu};

/// Which parts of the page were found at load time
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteAnchors {
    pub navbar: bool,
    pub mobile_menu: bool,
    pub anchor_links: bool,
    pub plan_cards: bool,
    pub carousel: bool,
}

impl SiteAnchors {
    pub fn all() -> Self {
        Self {
            navbar: true,
            mobile_menu: true,
            anchor_links: true,
            plan_cards: true,
            carousel: true,
        }
    }
}

/// Which link group a click came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Anchor,
    PlanCard,
}

/// Visible effects of one frame
#[derive(Debug, Default, PartialEq)]
pub struct FrameReport {
    pub navbar: Option<Visibility>,
    /// Hrefs to push onto the session history, in order
    pub history: Vec<String>,
}

pub struct Site {
    pub navbar: Option<NavbarController>,
    pub menu: Option<MobileMenu>,
    pub anchors: Option<LinkNavigator>,
    pub cards: Option<LinkNavigator>,
    pub carousel: Option<CarouselPipeline>,
    pub back_to_top: BackToTop,
}

impl Site {
    pub fn new(
        config: &AppConfig,
        found: SiteAnchors,
        decoder: Arc<dyn ImageDecoder>,
        initial_y: f64,
    ) -> Result<Self> {
        let carousel = if found.carousel {
            Some(CarouselPipeline::new(&config.carousel, decoder)?)
        } else {
            None
        };

        let mut back_to_top = BackToTop::new(&config.back_to_top);
        back_to_top.on_scroll(initial_y);

        Ok(Self {
            navbar: found
                .navbar
                .then(|| NavbarController::new(&config.navbar, initial_y)),
            menu: found.mobile_menu.then(MobileMenu::new),
            anchors: found
                .anchor_links
                .then(|| LinkNavigator::anchors(&config.scroll)),
            cards: found
                .plan_cards
                .then(|| LinkNavigator::cards(&config.scroll)),
            carousel,
            back_to_top,
        })
    }

    pub fn menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(MobileMenu::is_open)
    }

    /// A scroll event; true when a frame should be requested
    pub fn on_scroll(&mut self, y: f64) -> bool {
        self.back_to_top.on_scroll(y);
        self.navbar.as_mut().is_some_and(NavbarController::on_scroll)
    }

    /// One animation frame at time `now`
    ///
    /// The navbar samples the offset left by earlier scroll events. Scroll
    /// writes made by the navigators in this frame are reported as a new
    /// scroll event and sampled on the next frame.
    pub fn on_frame<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S, now: Instant) -> FrameReport {
        let mut report = FrameReport::default();
        let menu_open = self.menu_open();

        if let Some(navbar) = self.navbar.as_mut() {
            report.navbar = navbar.on_frame(surface.scroll_y(), menu_open);
        }

        let before = surface.scroll_y();
        for navigator in [self.anchors.as_mut(), self.cards.as_mut()].into_iter().flatten() {
            if let Some(href) = navigator.on_frame(&mut *surface, now) {
                report.history.push(href);
            }
        }

        let after = surface.scroll_y();
        if after != before {
            self.on_scroll(after);
        }

        report
    }

    pub fn on_link_click<S>(&mut self, surface: &mut S, kind: LinkKind, href: &str, now: Instant) -> ClickOutcome
    where
        S: ScrollSurface + AnchorLookup + ?Sized,
    {
        let navigator = match kind {
            LinkKind::Anchor => self.anchors.as_mut(),
            LinkKind::PlanCard => self.cards.as_mut(),
        };
        let Some(navigator) = navigator else {
            debug!(?kind, href, "No navigator wired for link");
            return ClickOutcome::Ignored;
        };

        let outcome = navigator.handle_click(&mut *surface, href, now);
        if let ClickOutcome::PushHistory(_) = outcome {
            // An unanimated jump still moves the page
            let y = surface.scroll_y();
            self.on_scroll(y);
        }
        if let Some(menu) = self.menu.as_mut() {
            menu.close();
        }
        outcome
    }

    pub fn on_init_frame(&mut self, y: f64) -> Option<Visibility> {
        self.navbar.as_mut().and_then(|navbar| navbar.on_init_frame(y))
    }

    pub fn on_page_show(&mut self, y: f64) -> Option<Visibility> {
        self.navbar.as_mut().and_then(|navbar| navbar.on_page_show(y))
    }

    pub fn on_hash_change(&mut self, y: f64) -> Option<Visibility> {
        self.navbar.as_mut().and_then(|navbar| navbar.on_hash_change(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessPage;
    use async_trait::async_trait;
    use atelia_core::media::DecodedImage;
    use std::time::Duration;

    struct InstantDecoder;

    #[async_trait]
    impl ImageDecoder for InstantDecoder {
        async fn decode(&self, _src: &str) -> Result<DecodedImage> {
            Ok(DecodedImage {
                width: 1,
                height: 1,
            })
        }
    }

    fn site(found: SiteAnchors) -> Site {
        Site::new(&AppConfig::default(), found, Arc::new(InstantDecoder), 0.0).unwrap()
    }

    fn page() -> HeadlessPage {
        HeadlessPage::new(8000.0, 900.0)
            .with_navbar(60.0)
            .with_anchor("services", 3000.0)
    }

    #[test]
    fn test_missing_elements_disable_controllers() {
        let mut site = site(SiteAnchors::default());
        let mut page = page();
        assert!(site.navbar.is_none());
        assert!(site.carousel.is_none());
        assert!(!site.on_scroll(500.0));
        assert_eq!(
            site.on_link_click(&mut page, LinkKind::Anchor, "#services", Instant::now()),
            ClickOutcome::Ignored
        );
    }

    #[test]
    fn test_animated_scroll_hides_navbar_and_pushes_history() {
        let mut site = site(SiteAnchors::all());
        let mut page = page();
        let start = Instant::now();

        let outcome = site.on_link_click(&mut page, LinkKind::Anchor, "#services", start);
        assert_eq!(outcome, ClickOutcome::Animating { target_y: 2928.0 });

        let mut hidden_at_some_point = false;
        let mut history = Vec::new();
        for frame in 1..120 {
            let report = site.on_frame(&mut page, start + Duration::from_millis(16 * frame));
            hidden_at_some_point |= report.navbar == Some(Visibility::Hidden);
            history.extend(report.history);
        }

        assert_eq!(page.scroll_y(), 2928.0);
        assert_eq!(history, vec!["#services".to_string()]);
        assert!(hidden_at_some_point);
        assert!(site.back_to_top.is_visible());
    }

    #[test]
    fn test_card_click_does_not_cancel_anchor_scroll() {
        let mut site = site(SiteAnchors::all());
        let mut page = page().with_anchor("plans", 5000.0);
        let start = Instant::now();

        let anchor = site.on_link_click(&mut page, LinkKind::Anchor, "#services", start);
        assert_eq!(anchor, ClickOutcome::Animating { target_y: 2928.0 });
        let card = site.on_link_click(&mut page, LinkKind::PlanCard, "#plans", start);
        assert_eq!(card, ClickOutcome::Animating { target_y: 4928.0 });

        assert!(site.anchors.as_ref().unwrap().is_animating());
        assert!(site.cards.as_ref().unwrap().is_animating());

        let mut history = Vec::new();
        for frame in 1..120 {
            let report = site.on_frame(&mut page, start + Duration::from_millis(16 * frame));
            history.extend(report.history);
        }

        // Card scrolls finish at 720ms, anchor scrolls at 820ms
        assert_eq!(history, vec!["#plans".to_string(), "#services".to_string()]);
        assert_eq!(page.scroll_y(), 2928.0);
    }

    #[test]
    fn test_open_menu_keeps_navbar_visible() {
        let mut site = site(SiteAnchors::all());
        let mut page = page();
        let now = Instant::now();

        for y in [300.0, 600.0] {
            page.set_scroll(y);
            site.on_scroll(y);
            site.on_frame(&mut page, now);
        }
        assert!(site.navbar.as_ref().unwrap().is_hidden());

        site.menu.as_mut().unwrap().open();
        page.set_scroll(900.0);
        site.on_scroll(900.0);
        let report = site.on_frame(&mut page, now);
        assert_eq!(report.navbar, Some(Visibility::Visible));
    }
}
