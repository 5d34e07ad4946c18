//! Continuation cursor type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque continuation token returned by the catalog API.
///
/// Cursors are single-use within one invocation: a cursor from one page is
/// echoed back on the next request and then discarded. No structure is
/// assumed beyond being a non-empty string to the upstream service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCursor(String);

impl PageCursor {
    /// Create a cursor from the token string the catalog returned.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the token string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PageCursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}
