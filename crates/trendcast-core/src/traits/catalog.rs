//! Catalog source trait.

use async_trait::async_trait;

use crate::Result;
use crate::catalog::{CatalogPage, PageCursor};

/// A paginated source of raw catalog items.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of items, optionally continuing from a cursor.
    ///
    /// Implementations are lenient about response shape: a response that
    /// does not carry an item collection yields a page with `items: None`
    /// rather than an error. Only transport-level faults are errors.
    async fn fetch_page(&self, cursor: Option<&PageCursor>) -> Result<CatalogPage>;
}
