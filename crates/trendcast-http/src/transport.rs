//! Shared HTTP plumbing.

use serde::Deserialize;

use trendcast_core::Error;
use trendcast_core::error::{ApiError, TransportError};

/// Build the shared HTTP client with a versioned user agent.
pub(crate) fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("trendcast/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("failed to build HTTP client")
}

/// Map a reqwest error onto the crate's transport error.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let inner = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(inner)
}

/// Error envelope shared by Google APIs.
#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: Option<GoogleErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    message: Option<String>,
    status: Option<String>,
}

/// Parse an error response body into an [`ApiError`].
pub(crate) async fn api_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();

    match response.json::<GoogleErrorBody>().await {
        Ok(GoogleErrorBody { error: Some(detail) }) => {
            ApiError::new(status, detail.status, detail.message)
        }
        _ => ApiError::new(status, None, None),
    }
}
