use std::fmt;

use jobfeed_logging::{feed_debug, feed_info, feed_warn};
use serde::{Deserialize, Serialize};

use crate::JobListing;

/// Listings requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;
/// Offset increment applied for each "load more".
pub const DEFAULT_PAGE_STEP: u32 = 10;

/// One outbound page request; serializes to the catalog request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFailureKind {
    /// Connection, HTTP status or size failure.
    Transport,
    /// The response body did not have the expected shape.
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub kind: PageFailureKind,
    pub message: String,
}

impl PageFailure {
    pub fn new(kind: PageFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for PageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PageFailureKind::Transport => write!(f, "transport failure: {}", self.message),
            PageFailureKind::Malformed => write!(f, "malformed response: {}", self.message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Fetching { offset: u32 },
}

/// What applying a response did to the accumulated set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Appended { count: usize },
    Failed(PageFailure),
    /// The response did not belong to the outstanding request.
    Ignored,
}

/// Owns the growing listing set and the pagination state.
///
/// At most one request is outstanding at a time, so responses are always
/// applied in issue order. The set is append-only for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    listings: Vec<JobListing>,
    version: u64,
    offset: u32,
    page_size: u32,
    page_step: u32,
    phase: LoadPhase,
    last_requested: Option<u32>,
    failed_offset: Option<u32>,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_PAGE_STEP)
    }
}

impl Accumulator {
    pub fn new(page_size: u32, page_step: u32) -> Self {
        Self {
            listings: Vec::new(),
            version: 0,
            offset: 0,
            page_size: page_size.max(1),
            page_step: page_step.max(1),
            phase: LoadPhase::Idle,
            last_requested: None,
            failed_offset: None,
        }
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    /// Bumped on every successful append.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Fetching { .. })
    }

    /// Offset of the last page that failed and has not been re-armed yet.
    pub fn failed_offset(&self) -> Option<u32> {
        self.failed_offset
    }

    /// The current offset, if idle and not requested yet.
    pub fn unrequested_offset(&self) -> Option<u32> {
        (!self.is_loading() && self.last_requested != Some(self.offset)).then_some(self.offset)
    }

    /// Moves to the next offset, returning the offset that should be requested.
    ///
    /// No-op while fetching, and while the current offset has not been
    /// requested yet. After a failure the failed offset is returned again
    /// instead of stepping past it. Stops advancing once the offset would
    /// overflow.
    pub fn advance_offset(&mut self) -> Option<u32> {
        if self.is_loading() {
            feed_debug!("advance ignored: fetch in flight at offset {}", self.offset);
            return None;
        }
        if let Some(offset) = self.failed_offset.take() {
            feed_info!("re-arming failed page at offset {}", offset);
            self.last_requested = None;
            return Some(offset);
        }
        if self.last_requested != Some(self.offset) {
            feed_debug!("advance ignored: offset {} not requested yet", self.offset);
            return None;
        }
        let Some(next) = self.offset.checked_add(self.page_step) else {
            feed_warn!(
                "advance ignored: offset {} + step {} overflows",
                self.offset,
                self.page_step
            );
            return None;
        };
        self.offset = next;
        Some(next)
    }

    /// Starts fetching `offset`, or returns `None` if a fetch is already in flight.
    pub fn request_page(&mut self, offset: u32) -> Option<PageRequest> {
        if let LoadPhase::Fetching { offset: current } = self.phase {
            feed_debug!(
                "request for offset {} rejected: offset {} in flight",
                offset,
                current
            );
            return None;
        }
        self.phase = LoadPhase::Fetching { offset };
        self.last_requested = Some(offset);
        Some(PageRequest {
            limit: self.page_size,
            offset,
        })
    }

    /// Applies the response for `request` and returns to idle.
    pub fn complete(
        &mut self,
        request: PageRequest,
        result: Result<Vec<JobListing>, PageFailure>,
    ) -> PageOutcome {
        if self.phase != (LoadPhase::Fetching { offset: request.offset }) {
            feed_warn!(
                "ignoring response for offset {} while {:?}",
                request.offset,
                self.phase
            );
            return PageOutcome::Ignored;
        }
        self.phase = LoadPhase::Idle;

        match result {
            Ok(page) => {
                let count = page.len();
                self.listings.extend(page);
                self.version += 1;
                feed_info!(
                    "page at offset {} appended {} listings (total {})",
                    request.offset,
                    count,
                    self.listings.len()
                );
                PageOutcome::Appended { count }
            }
            Err(failure) => {
                feed_warn!("page at offset {} failed: {}", request.offset, failure);
                self.failed_offset = Some(request.offset);
                PageOutcome::Failed(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(company: &str) -> JobListing {
        JobListing {
            company_name: company.to_string(),
            ..JobListing::default()
        }
    }

    #[test]
    fn first_request_moves_to_fetching() {
        let mut acc = Accumulator::default();
        let request = acc.request_page(0).unwrap();
        assert_eq!(request, PageRequest { limit: 12, offset: 0 });
        assert_eq!(acc.phase(), LoadPhase::Fetching { offset: 0 });
        assert!(acc.request_page(0).is_none());
    }

    #[test]
    fn mismatched_response_is_ignored() {
        let mut acc = Accumulator::default();
        acc.request_page(0).unwrap();
        let stray = PageRequest { limit: 12, offset: 40 };
        assert_eq!(
            acc.complete(stray, Ok(vec![listing("Stray")])),
            PageOutcome::Ignored
        );
        assert!(acc.is_loading());
        assert!(acc.listings().is_empty());
    }

    #[test]
    fn page_size_and_step_are_at_least_one() {
        let mut acc = Accumulator::new(0, 0);
        assert_eq!(acc.page_size(), 1);
        acc.request_page(0).unwrap();
        acc.complete(PageRequest { limit: 1, offset: 0 }, Ok(Vec::new()));
        assert_eq!(acc.advance_offset(), Some(1));
    }

    #[test]
    fn advance_stops_instead_of_overflowing() {
        let mut acc = Accumulator::new(12, u32::MAX / 2 + 1);
        acc.request_page(0).unwrap();
        acc.complete(PageRequest { limit: 12, offset: 0 }, Ok(Vec::new()));
        let second = acc.advance_offset().unwrap();
        assert_eq!(second, u32::MAX / 2 + 1);

        acc.request_page(second).unwrap();
        acc.complete(PageRequest { limit: 12, offset: second }, Ok(Vec::new()));
        assert_eq!(acc.advance_offset(), None);
        assert_eq!(acc.offset(), second);
        assert!(!acc.is_loading());
    }
}
