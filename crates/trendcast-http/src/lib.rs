//! trendcast-http - reqwest-backed implementations of the two external
//! collaborators: the YouTube catalog source and the Pub/Sub publish sink.

mod pubsub;
mod transport;
mod youtube;

pub use pubsub::PubsubPublisher;
pub use youtube::{MAX_PAGE_SIZE, YoutubeCatalog};
