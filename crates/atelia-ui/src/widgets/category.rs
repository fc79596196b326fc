/// Category switcher: a slide track plus a horizontally scrolling button bar
///
/// Buttons carry a `data-index` that need not match their DOM order.
#[derive(Debug, Clone)]
pub struct CategorySwitcher {
    slide_count: usize,
    button_indices: Vec<usize>,
    current: usize,
}

/// Geometry of the button bar, all values in pixels
#[derive(Debug, Clone, Copy)]
pub struct ButtonBarGeometry {
    pub wrap_width: f64,
    pub track_width: f64,
    /// Left edge of the active button relative to the wrapper
    pub active_left: f64,
    pub active_width: f64,
}

impl CategorySwitcher {
    /// `initial` is the data-index of the button marked active in markup
    pub fn new(slide_count: usize, button_indices: Vec<usize>, initial: Option<usize>) -> Self {
        let mut switcher = Self {
            slide_count,
            button_indices,
            current: 0,
        };
        switcher.go_to(initial.unwrap_or(0) as isize);
        switcher
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn go_to(&mut self, index: isize) {
        let last = self.slide_count.saturating_sub(1) as isize;
        self.current = index.clamp(0, last.max(0)) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.current as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current as isize - 1);
    }

    /// CSS transform of the slide track
    pub fn track_transform(&self) -> String {
        format!("translateX({}%)", -100 * self.current as i64)
    }

    /// DOM position of the button whose data-index is current
    pub fn active_button(&self) -> Option<usize> {
        self.button_indices.iter().position(|&i| i == self.current)
    }

    pub fn prev_disabled(&self) -> bool {
        self.current == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.current + 1 >= self.slide_count
    }

    /// Offset that centers the active button, 0 when the bar fits
    pub fn button_track_offset(geometry: &ButtonBarGeometry) -> f64 {
        if geometry.wrap_width <= 0.0 || geometry.track_width <= geometry.wrap_width {
            return 0.0;
        }
        let center = geometry.active_left + geometry.active_width / 2.0;
        let desired = center - geometry.wrap_width / 2.0;
        desired.clamp(0.0, geometry.track_width - geometry.wrap_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_to_clamps() {
        let mut switcher = CategorySwitcher::new(3, vec![2, 0, 1], Some(1));
        assert_eq!(switcher.current(), 1);
        switcher.go_to(-4);
        assert_eq!(switcher.current(), 0);
        assert!(switcher.prev_disabled());
        switcher.go_to(10);
        assert_eq!(switcher.current(), 2);
        assert!(switcher.next_disabled());
        assert_eq!(switcher.track_transform(), "translateX(-200%)");
    }

    #[test]
    fn test_active_button_found_by_data_index() {
        let mut switcher = CategorySwitcher::new(3, vec![2, 0, 1], None);
        assert_eq!(switcher.active_button(), Some(1));
        switcher.next();
        assert_eq!(switcher.active_button(), Some(2));
    }

    #[test]
    fn test_button_track_offset() {
        let fits = ButtonBarGeometry {
            wrap_width: 600.0,
            track_width: 500.0,
            active_left: 400.0,
            active_width: 80.0,
        };
        assert_eq!(CategorySwitcher::button_track_offset(&fits), 0.0);

        let overflowing = ButtonBarGeometry {
            wrap_width: 400.0,
            track_width: 1000.0,
            active_left: 500.0,
            active_width: 100.0,
        };
        assert_eq!(CategorySwitcher::button_track_offset(&overflowing), 350.0);

        let near_end = ButtonBarGeometry {
            active_left: 950.0,
            ..overflowing
        };
        assert_eq!(CategorySwitcher::button_track_offset(&near_end), 600.0);
    }
}
