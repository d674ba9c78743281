use std::sync::mpsc;
use std::time::Duration;

use futures_util::StreamExt;
use jobfeed_core::{JobListing, PageRequest};
use jobfeed_logging::{feed_debug, feed_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;

use crate::{CatalogPage, EngineEvent, FailureKind, FetchError};

/// Public sample catalog the listing view was built against.
pub const DEFAULT_ENDPOINT: &str = "https://api.weekday.technology/adhoc/getSampleJdJSON";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    /// `None` leaves connection setup bounded only by the transport.
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the whole request bounded only by the transport.
    pub request_timeout: Option<Duration>,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Receives engine events as they are produced.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// A paged job catalog.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<CatalogPage, FetchError>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePage {
    jd_list: Vec<JobListing>,
    #[serde(default)]
    total_count: Option<u64>,
}

/// Catalog served over HTTP: JSON request body POSTed, JSON page returned.
#[derive(Debug, Clone)]
pub struct ReqwestCatalog {
    settings: FetchSettings,
    endpoint: reqwest::Url,
    client: reqwest::Client,
}

impl ReqwestCatalog {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let endpoint = reqwest::Url::parse(&settings.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit));
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            endpoint,
            client,
        })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl CatalogSource for ReqwestCatalog {
    async fn fetch_page(&self, request: PageRequest) -> Result<CatalogPage, FetchError> {
        let body = serde_json::to_vec(&request)
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        feed_debug!(
            "POST {} offset={} limit={}",
            self.endpoint,
            request.offset,
            request.limit
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        decode_page(&bytes)
    }
}

/// Parses a catalog response body.
pub fn decode_page(bytes: &[u8]) -> Result<CatalogPage, FetchError> {
    let wire: WirePage = serde_json::from_slice(bytes).map_err(|err| {
        feed_warn!("catalog response did not parse: {}", err);
        FetchError::new(FailureKind::MalformedResponse, err.to_string())
    })?;
    Ok(CatalogPage {
        listings: wire.jd_list,
        total_count: wire.total_count,
    })
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
