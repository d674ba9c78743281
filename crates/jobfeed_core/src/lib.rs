//! Jobfeed core: pure acquisition and filtering pipeline for a paged job catalog.
//!
//! Nothing in this crate performs I/O or reads the clock. Timing primitives
//! take the current instant as an argument and report their next deadline;
//! network access is requested through [`Effect`] values.
mod criteria;
mod debounce;
mod effect;
mod filter;
mod listing;
mod msg;
mod pagination;
mod scroll;
mod state;
mod throttle;
mod update;
mod view_model;

pub use criteria::{
    FilterCriteria, RemoteMode, JOB_ROLE_OPTIONS, MAX_EXPERIENCE_OPTION, MIN_SALARY_OPTIONS,
    TECH_STACK_OPTIONS,
};
pub use debounce::Debouncer;
pub use effect::Effect;
pub use filter::{filter_listings, matches_criteria};
pub use listing::JobListing;
pub use msg::Msg;
pub use pagination::{
    Accumulator, LoadPhase, PageFailure, PageFailureKind, PageOutcome, PageRequest,
    DEFAULT_PAGE_SIZE, DEFAULT_PAGE_STEP,
};
pub use scroll::{ScrollMetrics, ScrollTrigger, DEFAULT_NEAR_BOTTOM_MARGIN_PX};
pub use state::{AppState, FeedSettings, DEFAULT_DEBOUNCE, DEFAULT_THROTTLE};
pub use throttle::Throttler;
pub use update::update;
pub use view_model::AppViewModel;
