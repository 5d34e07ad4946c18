//! Core traits for catalog sources and publish sinks.

mod catalog;
mod sink;

pub use catalog::CatalogSource;
pub use sink::PublishSink;
