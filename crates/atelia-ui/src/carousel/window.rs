use atelia_core::{Error, Result};

/// Circular window over `total` items, indexed from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselWindow {
    total: usize,
    visible: usize,
    start: usize,
}

impl CarouselWindow {
    pub fn new(total: usize, visible: usize) -> Result<Self> {
        if total == 0 {
            return Err(Error::InvalidCarousel("no images".to_string()));
        }
        if visible == 0 || visible > total {
            return Err(Error::InvalidCarousel(format!(
                "cannot show {} of {} images",
                visible, total
            )));
        }
        Ok(Self {
            total,
            visible,
            start: 1,
        })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Wrap any positive index into `1..=total`
    #[inline]
    pub fn normalize(&self, n: usize) -> usize {
        (n.saturating_sub(1) % self.total) + 1
    }

    pub fn next_start(&self) -> usize {
        self.normalize(self.start + 1)
    }

    /// Indices shown when the window starts at `start`
    pub fn indices_from(&self, start: usize) -> Vec<usize> {
        (0..self.visible).map(|k| self.normalize(start + k)).collect()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.indices_from(self.start)
    }

    pub(crate) fn set_start(&mut self, start: usize) {
        self.start = self.normalize(start);
    }
}
