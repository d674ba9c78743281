use crate::{FilterCriteria, JobListing};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    /// Filtered listings, in fetch order.
    pub listings: Vec<JobListing>,
    pub loading: bool,
    /// Nothing matches and nothing is loading: show the "no jobs found" message.
    pub no_results: bool,
    pub loaded_count: usize,
    pub offset: u32,
    /// Criteria currently applied to `listings`.
    pub criteria: FilterCriteria,
    /// A criteria edit is waiting out the debounce period.
    pub criteria_pending: bool,
    pub last_error: Option<String>,
    pub dirty: bool,
}
