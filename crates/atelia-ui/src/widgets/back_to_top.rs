use atelia_core::config::BackToTopConfig;

/// Floating button shown once the page is scrolled far enough
#[derive(Debug, Clone)]
pub struct BackToTop {
    threshold: f64,
    visible: bool,
}

impl BackToTop {
    pub fn new(config: &BackToTopConfig) -> Self {
        Self {
            threshold: config.threshold_px,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Update on scroll; returns true when visibility changed
    pub fn on_scroll(&mut self, y: f64) -> bool {
        let visible = y > self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    /// Offset a click scrolls to
    pub fn target(&self) -> f64 {
        0.0
    }
}
