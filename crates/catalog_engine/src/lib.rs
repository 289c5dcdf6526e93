//! Catalog engine: remote data source, effect execution and the session loop.
mod engine;
mod session;
mod source;
mod types;

pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use session::CatalogSession;
pub use source::{DataSource, ReqwestDataSource, SourceSettings};
pub use types::{EngineEvent, FailureKind, GenreRecord, MovieRecord, SourceError};
