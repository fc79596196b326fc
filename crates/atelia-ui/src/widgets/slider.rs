use crate::input::Key;

/// Minimum horizontal travel, in pixels, for a touch to count as a swipe
pub const SWIPE_THRESHOLD: f64 = 50.0;
/// Viewports at or below this width stack the category buttons
pub const NARROW_VIEWPORT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLayout {
    Row,
    Column,
}

impl ButtonLayout {
    pub fn for_viewport(width: f64) -> Self {
        if width <= NARROW_VIEWPORT {
            ButtonLayout::Column
        } else {
            ButtonLayout::Row
        }
    }
}

/// Slide show with one category button per slide; does not wrap
#[derive(Debug, Clone)]
pub struct ImageSlider {
    total: usize,
    current: usize,
    touch_start: Option<f64>,
}

impl ImageSlider {
    /// None when there are no slides to show
    pub fn new(total: usize) -> Option<Self> {
        (total > 0).then_some(Self {
            total,
            current: 0,
            touch_start: None,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn show(&mut self, index: usize) {
        self.current = index.min(self.total - 1);
    }

    pub fn next(&mut self) {
        self.show(self.current + 1);
    }

    pub fn prev(&mut self) {
        self.show(self.current.saturating_sub(1));
    }

    pub fn prev_disabled(&self) -> bool {
        self.current == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current == self.total - 1
    }

    pub fn on_key(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            _ => {}
        }
    }

    pub fn on_touch_start(&mut self, x: f64) {
        self.touch_start = Some(x);
    }

    /// Swiping left advances, swiping right goes back
    pub fn on_touch_end(&mut self, x: f64) {
        let Some(start) = self.touch_start.take() else {
            return;
        };
        let diff = start - x;
        if diff.abs() <= SWIPE_THRESHOLD {
            return;
        }
        if diff > 0.0 {
            self.next();
        } else {
            self.prev();
        }
    }
}
