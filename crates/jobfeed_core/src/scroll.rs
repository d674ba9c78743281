/// Default distance from the bottom, in pixels, that counts as "near bottom".
pub const DEFAULT_NEAR_BOTTOM_MARGIN_PX: f64 = 20.0;

/// Viewport scroll position as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_offset: f64,
    pub visible_height: f64,
    pub total_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_offset: f64, visible_height: f64, total_height: f64) -> Self {
        Self {
            scroll_offset,
            visible_height,
            total_height,
        }
    }
}

/// Signals scroll events that land within a margin of the bottom.
///
/// The trigger fires on every qualifying event, not once per approach;
/// whatever it drives must tolerate repeats. It only observes while
/// attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    margin_px: f64,
    attached: bool,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_NEAR_BOTTOM_MARGIN_PX)
    }
}

impl ScrollTrigger {
    pub fn new(margin_px: f64) -> Self {
        Self {
            margin_px,
            attached: false,
        }
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_near_bottom(&self, metrics: &ScrollMetrics) -> bool {
        metrics.scroll_offset + metrics.visible_height >= metrics.total_height - self.margin_px
    }

    /// Runs `on_near_bottom` if attached and `metrics` qualifies. Returns whether it ran.
    pub fn observe<F: FnOnce()>(&self, metrics: &ScrollMetrics, on_near_bottom: F) -> bool {
        if self.attached && self.is_near_bottom(metrics) {
            on_near_bottom();
            true
        } else {
            false
        }
    }
}
