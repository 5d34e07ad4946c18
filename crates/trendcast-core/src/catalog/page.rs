//! One fetched page of the catalog.

use super::{PageCursor, RawCatalogItem};

/// Output from fetching one page of the catalog.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    /// The raw items in this page, in catalog order.
    ///
    /// `None` means the response carried no item collection at all
    /// (malformed or error response); this is distinct from an empty
    /// collection and stops the pipeline.
    pub items: Option<Vec<RawCatalogItem>>,

    /// Cursor for the next page, if more pages exist.
    pub next: Option<PageCursor>,
}

impl CatalogPage {
    /// A page whose response carried no item collection.
    pub fn missing_items() -> Self {
        Self {
            items: None,
            next: None,
        }
    }
}
