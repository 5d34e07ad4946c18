//! trendcast-core - Core types, traits and the fetch-and-publish pipeline.

pub mod catalog;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod traits;

pub use catalog::{CatalogPage, PageCursor, RawCatalogItem};
pub use error::Error;
pub use pipeline::{RunReport, StopReason};
pub use record::VideoRecord;
pub use traits::{CatalogSource, PublishSink};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
