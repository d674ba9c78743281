use std::time::Instant;

use crate::{FilterCriteria, JobListing, PageFailure, PageRequest, ScrollMetrics};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The listing view became visible: start observing scroll and load the first page.
    Activated { at: Instant },
    /// The listing view went away: stop observing and drop pending timers.
    Deactivated,
    /// Raw viewport scroll event.
    Scrolled { metrics: ScrollMetrics, at: Instant },
    /// The criteria form emitted a complete new criteria value.
    CriteriaEdited { criteria: FilterCriteria, at: Instant },
    /// Timer tick; delivers debounced criteria and throttled offsets that became due.
    Tick { at: Instant },
    /// Catalog response for a previously issued request.
    PageLoaded {
        request: PageRequest,
        result: Result<Vec<JobListing>, PageFailure>,
    },
}
