use crate::input::Key;

/// Full-screen viewer over one project's images
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    images: Vec<String>,
    current: usize,
    active: bool,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on `images` at `start`; an empty set leaves the lightbox closed
    pub fn open(&mut self, images: Vec<String>, start: usize) {
        if images.is_empty() {
            return;
        }
        self.current = start.min(images.len() - 1);
        self.images = images;
        self.active = true;
    }

    pub fn close(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn locks_body_scroll(&self) -> bool {
        self.active
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + self.images.len() - 1) % self.images.len();
        }
    }

    pub fn current_src(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    pub fn alt_text(&self) -> String {
        format!("Image {}", self.current + 1)
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }

    /// Keys only act while the lightbox is showing
    pub fn on_key(&mut self, key: Key) {
        if !self.active {
            return;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> Vec<String> {
        ["a.jpg", "b.jpg", "c.jpg"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_navigation_wraps() {
        let mut lightbox = Lightbox::new();
        lightbox.open(images(), 0);
        lightbox.prev();
        assert_eq!(lightbox.current_src(), Some("c.jpg"));
        assert_eq!(lightbox.counter(), "3 / 3");
        lightbox.next();
        assert_eq!(lightbox.current_src(), Some("a.jpg"));
        assert_eq!(lightbox.alt_text(), "Image 1");
    }

    #[test]
    fn test_keys_ignored_when_closed() {
        let mut lightbox = Lightbox::new();
        lightbox.open(images(), 1);
        lightbox.on_key(Key::Escape);
        assert!(!lightbox.is_active());

        lightbox.on_key(Key::ArrowRight);
        assert_eq!(lightbox.current_src(), Some("b.jpg"));
    }

    #[test]
    fn test_empty_set_does_not_open() {
        let mut lightbox = Lightbox::new();
        lightbox.open(Vec::new(), 0);
        assert!(!lightbox.is_active());
        assert_eq!(lightbox.current_src(), None);
    }
}
