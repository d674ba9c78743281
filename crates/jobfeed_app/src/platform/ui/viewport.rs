use jobfeed_core::ScrollMetrics;

/// Virtual scroll position over the rendered card list.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scroll_offset: f64,
    visible_height: f64,
    card_height: f64,
    cards: usize,
}

impl Viewport {
    pub fn new(visible_height: f64, card_height: f64) -> Self {
        Self {
            scroll_offset: 0.0,
            visible_height,
            card_height,
            cards: 0,
        }
    }

    /// Updates the content height after a re-render; keeps the offset in range.
    pub fn set_cards(&mut self, cards: usize) {
        self.cards = cards;
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: f64) -> ScrollMetrics {
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, self.max_offset());
        self.metrics()
    }

    pub fn scroll_to_bottom(&mut self) -> ScrollMetrics {
        self.scroll_offset = self.max_offset();
        self.metrics()
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.scroll_offset, self.visible_height, self.total_height())
    }

    /// Index range of the cards currently in view.
    pub fn visible_cards(&self) -> std::ops::Range<usize> {
        if self.card_height <= 0.0 {
            return 0..self.cards;
        }
        let first = (self.scroll_offset / self.card_height).floor() as usize;
        let last = ((self.scroll_offset + self.visible_height) / self.card_height).ceil() as usize;
        first.min(self.cards)..last.min(self.cards)
    }

    fn total_height(&self) -> f64 {
        self.cards as f64 * self.card_height
    }

    fn max_offset(&self) -> f64 {
        (self.total_height() - self.visible_height).max(0.0)
    }
}
