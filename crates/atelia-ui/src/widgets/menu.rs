/// Hamburger menu for narrow viewports
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is locked while the menu covers it
    pub fn locks_body_scroll(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Overlay clicks and menu link clicks both close the menu
    pub fn close(&mut self) {
        self.open = false;
    }
}
