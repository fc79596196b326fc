//! Scroll-direction aware navbar visibility
//!
//! Scroll events only mark a sample as pending; the sample itself is read in
//! the next animation frame, so a burst of events inside one frame produces
//! at most one visibility change.

use atelia_core::NavbarConfig;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarState {
    pub hidden: bool,
    /// Offset the next delta is measured from
    pub last_y: f64,
    /// False until the first real sample after init or a page restore
    pub has_interacted: bool,
    /// A frame has been requested and not yet processed
    pub pending: bool,
}

#[derive(Debug, Clone)]
pub struct NavbarController {
    state: NavbarState,
    near_top: f64,
    hysteresis: f64,
}

impl NavbarController {
    /// Controller for a freshly loaded page, bar visible
    pub fn new(config: &NavbarConfig, initial_y: f64) -> Self {
        Self {
            state: NavbarState {
                hidden: false,
                last_y: initial_y,
                has_interacted: false,
                pending: false,
            },
            near_top: config.near_top_px,
            hysteresis: config.hysteresis_px,
        }
    }

    pub fn state(&self) -> &NavbarState {
        &self.state
    }

    pub fn is_hidden(&self) -> bool {
        self.state.hidden
    }

    pub fn visibility(&self) -> Visibility {
        if self.state.hidden {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    /// Record a scroll event; true when the caller must request a frame
    pub fn on_scroll(&mut self) -> bool {
        if self.state.pending {
            return false;
        }
        self.state.pending = true;
        true
    }

    /// Process the pending sample at offset `y`
    ///
    /// Returns the new visibility when it changed. Frames that were not
    /// requested through `on_scroll` are ignored.
    pub fn on_frame(&mut self, y: f64, menu_open: bool) -> Option<Visibility> {
        if !self.state.pending {
            return None;
        }
        self.state.pending = false;

        let before = self.visibility();
        self.apply_sample(y, menu_open);
        self.changed_from(before)
    }

    /// One scroll event immediately followed by its frame
    pub fn sample(&mut self, y: f64, menu_open: bool) -> Option<Visibility> {
        self.on_scroll();
        self.on_frame(y, menu_open)
    }

    /// First frame after init: the browser may have restored scroll by now
    pub fn on_init_frame(&mut self, y: f64) -> Option<Visibility> {
        self.resync(y)
    }

    /// Page shown again, possibly from the back/forward cache
    ///
    /// Re-arms the restore guard. A frame that is already pending stays
    /// pending and will be consumed as the baseline sample.
    pub fn on_page_show(&mut self, y: f64) -> Option<Visibility> {
        self.state.has_interacted = false;
        self.resync(y)
    }

    /// Hash navigation can move the page outside the scroll event flow
    pub fn on_hash_change(&mut self, y: f64) -> Option<Visibility> {
        let before = self.visibility();
        if y <= self.near_top {
            self.state.hidden = false;
        }
        self.changed_from(before)
    }

    fn resync(&mut self, y: f64) -> Option<Visibility> {
        let before = self.visibility();
        self.state.last_y = y;
        if y <= self.near_top {
            self.state.hidden = false;
        }
        self.changed_from(before)
    }

    fn apply_sample(&mut self, y: f64, menu_open: bool) {
        // The open menu hangs off the navbar and must stay reachable.
        if menu_open {
            self.state.hidden = false;
            return;
        }

        if y <= self.near_top {
            self.state.hidden = false;
            self.state.last_y = y;
            return;
        }

        if !self.state.has_interacted {
            debug!(y, "Treating first navbar sample as baseline");
            self.state.has_interacted = true;
            self.state.last_y = y;
            return;
        }

        let delta = y - self.state.last_y;
        if delta.abs() >= self.hysteresis {
            self.state.hidden = delta > 0.0 && y > self.near_top;
            self.state.last_y = y;
        }
    }

    fn changed_from(&self, before: Visibility) -> Option<Visibility> {
        let now = self.visibility();
        (now != before).then_some(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> NavbarController {
        NavbarController::new(&NavbarConfig::default(), 0.0)
    }

    fn feed(nav: &mut NavbarController, samples: &[f64]) {
        for &y in samples {
            nav.sample(y, false);
        }
    }

    #[test]
    fn test_near_top_samples_never_hide() {
        let mut nav = controller();
        feed(&mut nav, &[0.0, 5.0, 18.0]);
        assert!(!nav.is_hidden());
    }

    #[test]
    fn test_scroll_down_hides_then_top_reveals() {
        let mut nav = controller();
        assert_eq!(nav.sample(0.0, false), None);
        assert_eq!(nav.sample(50.0, false), None);
        assert_eq!(nav.sample(65.0, false), Some(Visibility::Hidden));
        assert_eq!(nav.sample(10.0, false), Some(Visibility::Visible));
    }

    #[test]
    fn test_first_sample_never_hides() {
        let mut nav = controller();
        assert_eq!(nav.sample(2400.0, false), None);
        assert!(!nav.is_hidden());
        assert!(nav.state().has_interacted);
        assert_eq!(nav.state().last_y, 2400.0);
    }

    #[test]
    fn test_jump_past_hysteresis_hides() {
        let mut nav = controller();
        feed(&mut nav, &[100.0]);
        assert_eq!(nav.sample(115.0, false), Some(Visibility::Hidden));
    }

    #[test]
    fn test_small_deltas_do_not_creep() {
        let mut nav = controller();
        feed(&mut nav, &[100.0]);

        // Each step is below the threshold and last_y stays at 100
        for y in [103.0, 106.0, 107.5] {
            assert_eq!(nav.sample(y, false), None);
            assert_eq!(nav.state().last_y, 100.0);
        }
        assert!(!nav.is_hidden());

        assert_eq!(nav.sample(108.0, false), Some(Visibility::Hidden));
    }

    #[test]
    fn test_scrolling_up_reveals() {
        let mut nav = controller();
        feed(&mut nav, &[300.0, 400.0]);
        assert!(nav.is_hidden());
        assert_eq!(nav.sample(380.0, false), Some(Visibility::Visible));
    }

    #[test]
    fn test_open_menu_forces_visible() {
        let mut nav = controller();
        feed(&mut nav, &[300.0, 400.0]);
        assert_eq!(nav.sample(600.0, true), Some(Visibility::Visible));
        // last_y untouched by the menu branch
        assert_eq!(nav.state().last_y, 400.0);
    }

    #[test]
    fn test_events_in_one_frame_coalesce() {
        let mut nav = controller();
        feed(&mut nav, &[300.0]);

        assert!(nav.on_scroll());
        assert!(!nav.on_scroll());
        assert!(!nav.on_scroll());
        assert_eq!(nav.on_frame(400.0, false), Some(Visibility::Hidden));

        // A second frame without a new event does nothing
        assert_eq!(nav.on_frame(10.0, false), None);
        assert!(nav.is_hidden());
    }

    #[test]
    fn test_page_show_rearms_guard() {
        let mut nav = controller();
        feed(&mut nav, &[300.0, 400.0]);
        assert!(nav.is_hidden());

        assert_eq!(nav.on_page_show(1800.0), None);
        assert_eq!(nav.sample(1900.0, false), None);
        assert!(nav.is_hidden());
        assert_eq!(nav.state().last_y, 1900.0);

        assert_eq!(nav.on_page_show(0.0), Some(Visibility::Visible));
    }

    #[test]
    fn test_restored_scroll_after_init_is_baseline() {
        let mut nav = controller();
        nav.on_init_frame(1500.0);
        assert_eq!(nav.sample(1600.0, false), None);
        assert!(!nav.is_hidden());
    }

    #[test]
    fn test_hash_change_near_top_reveals() {
        let mut nav = controller();
        feed(&mut nav, &[300.0, 400.0]);
        assert_eq!(nav.on_hash_change(900.0), None);
        assert_eq!(nav.on_hash_change(12.0), Some(Visibility::Visible));
    }
}
