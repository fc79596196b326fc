//! In-memory page used for scenario replay and tests

use std::collections::HashMap;

use super::{AnchorLookup, CarouselSurface, ScrollSurface, Transition};

/// Page geometry plus a log of every scroll write
#[derive(Debug, Clone)]
pub struct HeadlessPage {
    scroll_y: f64,
    document_height: f64,
    viewport_height: f64,
    navbar_height: f64,
    /// Document-relative tops of anchor targets
    anchors: HashMap<String, f64>,
    scroll_writes: Vec<f64>,
}

impl HeadlessPage {
    pub fn new(document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            document_height,
            viewport_height,
            navbar_height: 0.0,
            anchors: HashMap::new(),
            scroll_writes: Vec::new(),
        }
    }

    pub fn with_navbar(mut self, height: f64) -> Self {
        self.navbar_height = height;
        self
    }

    pub fn with_anchor(mut self, id: impl Into<String>, document_top: f64) -> Self {
        self.anchors.insert(id.into(), document_top);
        self
    }

    /// Move the page without recording a write, as a user or the browser would
    pub fn set_scroll(&mut self, y: f64) {
        self.scroll_y = y.clamp(0.0, self.max_scroll_y());
    }

    pub fn set_document_height(&mut self, height: f64) {
        self.document_height = height;
    }

    pub fn scroll_writes(&self) -> &[f64] {
        &self.scroll_writes
    }

    pub fn clear_writes(&mut self) {
        self.scroll_writes.clear();
    }
}

impl ScrollSurface for HeadlessPage {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
        self.scroll_writes.push(y);
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}

impl AnchorLookup for HeadlessPage {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        self.anchors.get(id).map(|top| top - self.scroll_y)
    }

    fn navbar_height(&self) -> f64 {
        self.navbar_height
    }
}

/// One recorded mutation of the carousel grid
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselOp {
    SetTransition(Option<Transition>),
    Translate(f64),
    FlushLayout,
    SetSource(usize, String),
}

/// Carousel grid with fixed card geometry that records every mutation
#[derive(Debug, Clone)]
pub struct HeadlessCarousel {
    card_width: f64,
    column_gap: f64,
    slots: Vec<String>,
    translate_x: f64,
    transition: Option<Transition>,
    ops: Vec<CarouselOp>,
}

impl HeadlessCarousel {
    pub fn new(slot_count: usize, card_width: f64, column_gap: f64) -> Self {
        Self {
            card_width,
            column_gap,
            slots: vec![String::new(); slot_count],
            translate_x: 0.0,
            transition: None,
            ops: Vec::new(),
        }
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn translate_x(&self) -> f64 {
        self.translate_x
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn ops(&self) -> &[CarouselOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<CarouselOp> {
        std::mem::take(&mut self.ops)
    }
}

impl CarouselSurface for HeadlessCarousel {
    fn card_width(&self) -> f64 {
        self.card_width
    }

    fn column_gap(&self) -> f64 {
        self.column_gap
    }

    fn set_transition(&mut self, transition: Option<&Transition>) {
        self.transition = transition.cloned();
        self.ops.push(CarouselOp::SetTransition(transition.cloned()));
    }

    fn set_translate_x(&mut self, px: f64) {
        self.translate_x = px;
        self.ops.push(CarouselOp::Translate(px));
    }

    fn flush_layout(&mut self) {
        self.ops.push(CarouselOp::FlushLayout);
    }

    fn set_slot_source(&mut self, slot: usize, src: &str) {
        if let Some(current) = self.slots.get_mut(slot) {
            *current = src.to_string();
        }
        self.ops.push(CarouselOp::SetSource(slot, src.to_string()));
    }
}
