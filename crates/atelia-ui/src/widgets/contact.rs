use crate::input::Key;

/// Floating contact bubble and its options panel
#[derive(Debug, Clone, Default)]
pub struct ContactBubble {
    open: bool,
}

impl ContactBubble {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn on_bubble_click(&mut self) {
        self.open = !self.open;
    }

    /// Document click; clicks inside the panel stop propagation and never get here
    pub fn on_outside_click(&mut self) {
        self.open = false;
    }

    pub fn on_key(&mut self, key: Key) {
        if key == Key::Escape {
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_toggles_and_dismisses() {
        let mut bubble = ContactBubble::new();
        bubble.on_bubble_click();
        assert!(bubble.is_open());
        assert_eq!(bubble.aria_expanded(), "true");

        bubble.on_key(Key::ArrowLeft);
        assert!(bubble.is_open());
        bubble.on_key(Key::Escape);
        assert!(!bubble.is_open());

        bubble.on_bubble_click();
        bubble.on_outside_click();
        assert!(!bubble.is_open());
    }
}
