//! Catalog-side types: raw items, fetched pages and continuation cursors.

mod cursor;
mod page;
mod raw_item;

pub use cursor::PageCursor;
pub use page::CatalogPage;
pub use raw_item::{FieldGroup, RawCatalogItem};
