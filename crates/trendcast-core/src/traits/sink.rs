//! Publish sink trait.

use async_trait::async_trait;

use crate::Result;

/// An ordered message-distribution channel receiving one message per
/// normalized record.
#[async_trait]
pub trait PublishSink: Send + Sync {
    /// Hand one serialized record to the channel.
    ///
    /// Returning `Ok` means the call was issued and accepted; delivery
    /// semantics beyond that are the channel's concern.
    async fn publish(&self, payload: Vec<u8>) -> Result<()>;
}
