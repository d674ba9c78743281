use std::fmt;

use jobfeed_core::{JobListing, PageFailure, PageFailureKind, PageRequest};
use thiserror::Error;

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogPage {
    pub listings: Vec<JobListing>,
    /// Size of the whole catalog, when the service reports it.
    pub total_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PageFetched {
        request: PageRequest,
        result: Result<CatalogPage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<FetchError> for PageFailure {
    fn from(err: FetchError) -> Self {
        match err.kind {
            FailureKind::MalformedResponse => {
                PageFailure::new(PageFailureKind::Malformed, err.message)
            }
            // Transport kinds are several; keep which one in the message.
            _ => PageFailure::new(PageFailureKind::Transport, err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedResponse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_failure_text_names_the_category_once() {
        let malformed = PageFailure::from(FetchError::new(
            FailureKind::MalformedResponse,
            "missing field `jdList`",
        ));
        assert_eq!(
            malformed.to_string(),
            "malformed response: missing field `jdList`"
        );

        let timeout =
            PageFailure::from(FetchError::new(FailureKind::Timeout, "operation timed out"));
        assert_eq!(timeout.kind, PageFailureKind::Transport);
        assert_eq!(
            timeout.to_string(),
            "transport failure: timeout: operation timed out"
        );
    }
}
