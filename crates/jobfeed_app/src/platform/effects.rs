use std::sync::{mpsc, Arc};

use jobfeed_core::{Effect, Msg};
use jobfeed_engine::{EngineError, EngineEvent, EngineHandle, EventSink, FetchSettings};
use jobfeed_logging::feed_info;

use super::app::HostEvent;

/// Turns engine events into core messages on the host's inbox.
struct HostEventSink {
    tx: mpsc::Sender<HostEvent>,
}

impl EventSink for HostEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(HostEvent::Core(map_event(event)));
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { request, result } => Msg::PageLoaded {
            request,
            result: result.map(|page| page.listings).map_err(Into::into),
        },
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, tx: mpsc::Sender<HostEvent>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(HostEventSink { tx }))?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage(request) => {
                    feed_info!(
                        "FetchPage offset={} limit={}",
                        request.offset,
                        request.limit
                    );
                    self.engine.fetch_page(request);
                }
            }
        }
    }
}
