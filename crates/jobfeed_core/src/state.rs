use std::time::{Duration, Instant};

use crate::filter::filter_listings;
use crate::view_model::AppViewModel;
use crate::{
    Accumulator, Debouncer, FilterCriteria, JobListing, PageFailure, ScrollTrigger, Throttler,
    DEFAULT_NEAR_BOTTOM_MARGIN_PX, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_STEP,
};

/// Quiet period applied to criteria edits.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(600);
/// Minimum spacing between page requests driven by scrolling.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(1000);

/// Tunables for the acquisition pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSettings {
    pub page_size: u32,
    pub page_step: u32,
    pub debounce: Duration,
    pub throttle: Duration,
    pub near_bottom_margin_px: f64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_step: DEFAULT_PAGE_STEP,
            debounce: DEFAULT_DEBOUNCE,
            throttle: DEFAULT_THROTTLE,
            near_bottom_margin_px: DEFAULT_NEAR_BOTTOM_MARGIN_PX,
        }
    }
}

/// Everything the listing view owns. Mutated only through [`update`](crate::update).
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub(crate) accumulator: Accumulator,
    pub(crate) trigger: ScrollTrigger,
    pub(crate) offsets: Throttler<u32>,
    pub(crate) criteria_input: Debouncer<FilterCriteria>,
    criteria: FilterCriteria,
    criteria_revision: u64,
    filtered: Vec<JobListing>,
    /// (criteria revision, accumulator version) that `filtered` was derived from.
    filtered_for: (u64, u64),
    last_error: Option<PageFailure>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(&FeedSettings::default())
    }

    pub fn with_settings(settings: &FeedSettings) -> Self {
        Self {
            accumulator: Accumulator::new(settings.page_size, settings.page_step),
            trigger: ScrollTrigger::new(settings.near_bottom_margin_px),
            offsets: Throttler::new(settings.throttle),
            criteria_input: Debouncer::new(settings.debounce),
            criteria: FilterCriteria::default(),
            criteria_revision: 0,
            filtered: Vec::new(),
            filtered_for: (0, 0),
            last_error: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.accumulator.is_loading();
        AppViewModel {
            listings: self.filtered.clone(),
            loading,
            no_results: self.filtered.is_empty() && !loading,
            loaded_count: self.accumulator.listings().len(),
            offset: self.accumulator.offset(),
            criteria: self.criteria.clone(),
            criteria_pending: self.criteria_input.is_pending(),
            last_error: self.last_error.as_ref().map(ToString::to_string),
            dirty: self.dirty,
        }
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub fn is_active(&self) -> bool {
        self.trigger.is_attached()
    }

    /// Earliest instant at which a `Tick` has something to deliver.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.criteria_input.deadline(), self.offsets.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn apply_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.criteria_revision += 1;
        }
        self.mark_dirty();
    }

    pub(crate) fn set_last_error(&mut self, failure: Option<PageFailure>) {
        self.last_error = failure;
        self.mark_dirty();
    }

    /// Re-derives the filtered set when either input changed since the last derivation.
    pub(crate) fn refresh_filtered(&mut self) {
        let key = (self.criteria_revision, self.accumulator.version());
        if key == self.filtered_for {
            return;
        }
        self.filtered = filter_listings(self.accumulator.listings(), &self.criteria);
        self.filtered_for = key;
        self.mark_dirty();
    }
}
