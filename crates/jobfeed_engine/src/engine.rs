use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use jobfeed_core::PageRequest;
use jobfeed_logging::{feed_debug, feed_info, feed_warn};
use thiserror::Error;
use tokio::task::JoinError;

use crate::fetch::{CatalogSource, EventSink, FetchSettings, ReqwestCatalog};
use crate::{CatalogPage, EngineEvent, FailureKind, FetchError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("catalog settings rejected: {0}")]
    Settings(#[from] FetchError),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
}

enum EngineCommand {
    FetchPage(PageRequest),
}

/// Runs catalog requests on a background runtime and reports results to a sink.
///
/// Commands are served one at a time in submission order. A request, once
/// started, always runs to completion and is always reported; a source that
/// panics is reported as a failed page.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let catalog = ReqwestCatalog::new(settings)?;
        Self::with_source(Arc::new(catalog), sink)
    }

    pub fn with_source(
        source: Arc<dyn CatalogSource>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("jobfeed-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::FetchPage(request) => {
                            let source = Arc::clone(&source);
                            // A panicking source only fails its own task.
                            let task =
                                runtime.spawn(async move { source.fetch_page(request).await });
                            let result = runtime
                                .block_on(task)
                                .unwrap_or_else(|err| Err(task_failure(err)));
                            report(request, result, sink.as_ref());
                        }
                    }
                }
                feed_debug!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn fetch_page(&self, request: PageRequest) {
        if self.cmd_tx.send(EngineCommand::FetchPage(request)).is_err() {
            feed_warn!("engine stopped; dropping request for offset {}", request.offset);
        }
    }
}

fn task_failure(err: JoinError) -> FetchError {
    FetchError::new(FailureKind::Network, format!("catalog task aborted: {err}"))
}

fn report(request: PageRequest, result: Result<CatalogPage, FetchError>, sink: &dyn EventSink) {
    match &result {
        Ok(page) => feed_info!(
            "offset {} returned {} listings (catalog total {:?})",
            request.offset,
            page.listings.len(),
            page.total_count
        ),
        Err(err) => feed_warn!("offset {} failed: {}", request.offset, err),
    }
    sink.emit(EngineEvent::PageFetched { request, result });
}
