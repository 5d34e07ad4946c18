//! YouTube Data API catalog source.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use trendcast_core::catalog::{CatalogPage, PageCursor, RawCatalogItem};
use trendcast_core::{CatalogSource, Result};

use crate::transport;

/// Videos-listing endpoint of the YouTube Data API v3.
const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/videos";

/// Sub-resource groups requested for every item.
const PART: &str = "snippet,statistics,contentDetails,topicDetails";

/// Chart selector for trending videos.
const CHART: &str = "mostPopular";

/// Upstream cap on `maxResults`.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Query parameters for the videos-listing request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VideoListQuery<'a> {
    part: &'a str,
    chart: &'a str,
    region_code: &'a str,
    max_results: u32,
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

/// A catalog source backed by the YouTube `videos.list` endpoint.
///
/// Response handling is deliberately lenient: any response whose body does
/// not parse as JSON or carries no `items` array is reported as a page with
/// no item collection rather than an error, matching the upstream contract
/// where an absent collection signals end of data. Only transport-level
/// faults surface as errors.
#[derive(Debug, Clone)]
pub struct YoutubeCatalog {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    region: String,
    page_size: u32,
}

impl YoutubeCatalog {
    /// Create a source for the production endpoint with default region
    /// ("US") and the maximum page size.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: transport::build_client(),
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            api_key: api_key.into(),
            region: "US".to_string(),
            page_size: MAX_PAGE_SIZE,
        }
    }

    /// Override the endpoint (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Set the region code for the trending chart.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the page size, clamped to the upstream cap.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.min(MAX_PAGE_SIZE);
        self
    }
}

#[async_trait]
impl CatalogSource for YoutubeCatalog {
    #[instrument(skip(self), fields(endpoint = %self.endpoint, region = %self.region))]
    async fn fetch_page(&self, cursor: Option<&PageCursor>) -> Result<CatalogPage> {
        let query = VideoListQuery {
            part: PART,
            chart: CHART,
            region_code: &self.region,
            max_results: self.page_size,
            key: &self.api_key,
            page_token: cursor.map(PageCursor::as_str),
        };
        debug!(page_token = ?query.page_token, "fetching catalog page");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&query)
            .send()
            .await
            .map_err(transport::transport_error)?;

        let status = response.status();
        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                warn!(status = %status, error = %err, "unparseable catalog response, treating as end of data");
                return Ok(CatalogPage::missing_items());
            }
        };

        if !status.is_success() {
            // The reference behavior swallows error responses too: their
            // bodies carry no item collection, so the loop stops normally.
            warn!(status = %status, "catalog returned an error status, treating as end of data");
        }

        let items = body.get("items").and_then(|v| v.as_array()).map(|items| {
            items
                .iter()
                .cloned()
                .map(RawCatalogItem::new)
                .collect::<Vec<_>>()
        });
        let next = body
            .get("nextPageToken")
            .and_then(|v| v.as_str())
            .map(PageCursor::new);

        if let Some(items) = &items {
            debug!(page_items = items.len(), has_next = next.is_some(), "fetched catalog page");
        }

        Ok(CatalogPage { items, next })
    }
}
