//! Jobfeed engine: catalog I/O and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::{EngineError, EngineHandle};
pub use fetch::{
    decode_page, CatalogSource, ChannelEventSink, EventSink, FetchSettings, ReqwestCatalog,
    DEFAULT_ENDPOINT,
};
pub use types::{CatalogPage, EngineEvent, FailureKind, FetchError};
