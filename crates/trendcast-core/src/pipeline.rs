//! The fetch-transform-publish loop.
//!
//! One invocation drives a [`CatalogSource`] page by page, normalizes each
//! item into a [`VideoRecord`], hands the serialized record to a
//! [`PublishSink`], and stops on the first of: target count reached, page
//! without an item collection, no continuation cursor, or a fetch/publish
//! fault. The loop never fails the invocation: faults stop it early and
//! the report carries the true partial count.

use tracing::{debug, error, info, warn};

use crate::catalog::PageCursor;
use crate::record::VideoRecord;
use crate::traits::{CatalogSource, PublishSink};

/// Default target total count per invocation.
pub const DEFAULT_TARGET: u64 = 200;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The target count was reached.
    TargetReached,
    /// The catalog returned no continuation cursor (natural end of data).
    CatalogExhausted,
    /// A page response carried no item collection at all.
    ///
    /// Kept separate from [`CatalogExhausted`](Self::CatalogExhausted) so
    /// malformed responses are distinguishable in logs, even though both
    /// stop the loop the same way.
    MissingItems,
    /// A page fetch failed at the transport level.
    FetchFailed,
    /// A publish call failed.
    PublishFailed,
}

/// Outcome of one invocation.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of successfully issued publish calls.
    pub published: u64,
    /// Number of page fetches performed.
    pub pages_fetched: u32,
    /// Why the loop stopped.
    pub stop: StopReason,
}

/// Run one fetch-and-publish invocation, emitting at most `target` records.
///
/// Items are published in catalog order, within and across pages. A page
/// holding more items than the remaining budget is truncated and no
/// further page is fetched, so at most ⌈target / page_size⌉ fetches occur.
pub async fn run<S, P>(source: &S, sink: &P, target: u64) -> RunReport
where
    S: CatalogSource + ?Sized,
    P: PublishSink + ?Sized,
{
    let mut published = 0u64;
    let mut pages_fetched = 0u32;
    let mut cursor: Option<PageCursor> = None;

    if target == 0 {
        return RunReport {
            published,
            pages_fetched,
            stop: StopReason::TargetReached,
        };
    }

    loop {
        let page = match source.fetch_page(cursor.as_ref()).await {
            Ok(page) => page,
            Err(err) => {
                error!(error = %err, published, "page fetch failed, stopping with partial count");
                return RunReport {
                    published,
                    pages_fetched,
                    stop: StopReason::FetchFailed,
                };
            }
        };
        pages_fetched += 1;

        let Some(items) = page.items else {
            warn!(
                pages_fetched,
                published, "page carried no item collection, stopping"
            );
            return RunReport {
                published,
                pages_fetched,
                stop: StopReason::MissingItems,
            };
        };

        debug!(page_items = items.len(), pages_fetched, "processing page");

        for item in &items {
            if published >= target {
                break;
            }

            let record = VideoRecord::from_raw(item);
            let payload = match record.to_payload() {
                Ok(payload) => payload,
                Err(err) => {
                    error!(error = %err, published, "record encoding failed, stopping");
                    return RunReport {
                        published,
                        pages_fetched,
                        stop: StopReason::PublishFailed,
                    };
                }
            };

            if let Err(err) = sink.publish(payload).await {
                error!(error = %err, published, "publish failed, stopping with partial count");
                return RunReport {
                    published,
                    pages_fetched,
                    stop: StopReason::PublishFailed,
                };
            }
            published += 1;
        }

        if published >= target {
            info!(published, pages_fetched, "target count reached");
            return RunReport {
                published,
                pages_fetched,
                stop: StopReason::TargetReached,
            };
        }

        match page.next {
            Some(next) => cursor = Some(next),
            None => {
                info!(published, pages_fetched, "catalog exhausted");
                return RunReport {
                    published,
                    pages_fetched,
                    stop: StopReason::CatalogExhausted,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogPage, RawCatalogItem};
    use crate::{Error, Result, error::TransportError};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Source that replays a scripted sequence of fetch outcomes and
    /// records the cursor supplied on each call.
    struct ScriptedSource {
        pages: Mutex<VecDeque<Result<CatalogPage>>>,
        cursors_seen: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Result<CatalogPage>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                cursors_seen: Mutex::new(Vec::new()),
            }
        }

        fn fetch_count(&self) -> usize {
            self.cursors_seen.lock().unwrap().len()
        }

        fn cursors_seen(&self) -> Vec<Option<String>> {
            self.cursors_seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogSource for ScriptedSource {
        async fn fetch_page(&self, cursor: Option<&PageCursor>) -> Result<CatalogPage> {
            self.cursors_seen
                .lock()
                .unwrap()
                .push(cursor.map(|c| c.as_str().to_owned()));
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .expect("fetched past the scripted pages")
        }
    }

    /// Sink that records payloads, optionally failing from the nth call.
    struct VecSink {
        payloads: Mutex<Vec<Vec<u8>>>,
        fail_from: Option<usize>,
    }

    impl VecSink {
        fn new() -> Self {
            Self {
                payloads: Mutex::new(Vec::new()),
                fail_from: None,
            }
        }

        fn failing_from(call: usize) -> Self {
            Self {
                payloads: Mutex::new(Vec::new()),
                fail_from: Some(call),
            }
        }

        fn published_ids(&self) -> Vec<String> {
            self.payloads
                .lock()
                .unwrap()
                .iter()
                .map(|payload| {
                    let value: Value = serde_json::from_slice(payload).unwrap();
                    value["id"].as_str().unwrap().to_owned()
                })
                .collect()
        }
    }

    #[async_trait]
    impl PublishSink for VecSink {
        async fn publish(&self, payload: Vec<u8>) -> Result<()> {
            let mut payloads = self.payloads.lock().unwrap();
            if let Some(fail_from) = self.fail_from
                && payloads.len() + 1 >= fail_from
            {
                return Err(Error::Transport(TransportError::Connection {
                    message: "broker unreachable".to_string(),
                }));
            }
            payloads.push(payload);
            Ok(())
        }
    }

    fn item(id: &str) -> RawCatalogItem {
        RawCatalogItem::new(json!({ "id": id }))
    }

    fn page(ids: &[&str], next: Option<&str>) -> Result<CatalogPage> {
        Ok(CatalogPage {
            items: Some(ids.iter().map(|id| item(id)).collect()),
            next: next.map(PageCursor::new),
        })
    }

    fn ids(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{prefix}{i:03}")).collect()
    }

    fn page_of(ids: &[String], next: Option<&str>) -> Result<CatalogPage> {
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        page(&refs, next)
    }

    #[tokio::test]
    async fn target_zero_fetches_nothing() {
        let source = ScriptedSource::new(vec![]);
        let sink = VecSink::new();

        let report = run(&source, &sink, 0).await;

        assert_eq!(report.published, 0);
        assert_eq!(report.pages_fetched, 0);
        assert_eq!(report.stop, StopReason::TargetReached);
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn single_short_page_exhausts_catalog() {
        // 30 items available, target 120: everything publishes, then stop.
        let available = ids("vid", 30);
        let source = ScriptedSource::new(vec![page_of(&available, None)]);
        let sink = VecSink::new();

        let report = run(&source, &sink, 120).await;

        assert_eq!(report.published, 30);
        assert_eq!(report.pages_fetched, 1);
        assert_eq!(report.stop, StopReason::CatalogExhausted);
        assert_eq!(sink.published_ids(), available);
    }

    #[tokio::test]
    async fn three_pages_reach_target_in_order() {
        // T=120 with 50-item pages: 3 fetches (50+50+20), order preserved.
        let first = ids("a", 50);
        let second = ids("b", 50);
        let third = ids("c", 50);
        let source = ScriptedSource::new(vec![
            page_of(&first, Some("p2")),
            page_of(&second, Some("p3")),
            page_of(&third, Some("p4")),
        ]);
        let sink = VecSink::new();

        let report = run(&source, &sink, 120).await;

        assert_eq!(report.published, 120);
        assert_eq!(report.pages_fetched, 3);
        assert_eq!(report.stop, StopReason::TargetReached);
        assert_eq!(
            source.cursors_seen(),
            vec![None, Some("p2".to_string()), Some("p3".to_string())]
        );

        let mut expected = first;
        expected.extend(second);
        expected.extend(third.into_iter().take(20));
        assert_eq!(sink.published_ids(), expected);
    }

    #[tokio::test]
    async fn oversized_page_is_capped_without_further_fetch() {
        let source = ScriptedSource::new(vec![page(
            &["v1", "v2", "v3", "v4", "v5"],
            Some("more"),
        )]);
        let sink = VecSink::new();

        let report = run(&source, &sink, 3).await;

        assert_eq!(report.published, 3);
        assert_eq!(report.pages_fetched, 1);
        assert_eq!(report.stop, StopReason::TargetReached);
        assert_eq!(sink.published_ids(), vec!["v1", "v2", "v3"]);
    }

    #[tokio::test]
    async fn target_reached_at_page_boundary_skips_next_fetch() {
        // A cursor is present but the budget is spent: no extra fetch.
        let exact = ids("vid", 50);
        let source = ScriptedSource::new(vec![page_of(&exact, Some("p2"))]);
        let sink = VecSink::new();

        let report = run(&source, &sink, 50).await;

        assert_eq!(report.published, 50);
        assert_eq!(report.pages_fetched, 1);
        assert_eq!(report.stop, StopReason::TargetReached);
    }

    #[tokio::test]
    async fn missing_items_on_first_page_stops_normally() {
        let source = ScriptedSource::new(vec![Ok(CatalogPage::missing_items())]);
        let sink = VecSink::new();

        let report = run(&source, &sink, 120).await;

        assert_eq!(report.published, 0);
        assert_eq!(report.pages_fetched, 1);
        assert_eq!(report.stop, StopReason::MissingItems);
    }

    #[tokio::test]
    async fn missing_items_mid_run_keeps_earlier_publishes() {
        let source = ScriptedSource::new(vec![
            page(&["v1", "v2"], Some("p2")),
            Ok(CatalogPage::missing_items()),
        ]);
        let sink = VecSink::new();

        let report = run(&source, &sink, 120).await;

        assert_eq!(report.published, 2);
        assert_eq!(report.stop, StopReason::MissingItems);
        assert_eq!(sink.published_ids(), vec!["v1", "v2"]);
    }

    #[tokio::test]
    async fn fetch_fault_reports_partial_count() {
        let source = ScriptedSource::new(vec![
            page(&["v1", "v2"], Some("p2")),
            Err(Error::Transport(TransportError::Timeout)),
        ]);
        let sink = VecSink::new();

        let report = run(&source, &sink, 120).await;

        assert_eq!(report.published, 2);
        assert_eq!(report.pages_fetched, 1);
        assert_eq!(report.stop, StopReason::FetchFailed);
    }

    #[tokio::test]
    async fn publish_fault_reports_partial_count() {
        let source = ScriptedSource::new(vec![page(&["v1", "v2", "v3"], None)]);
        let sink = VecSink::failing_from(3);

        let report = run(&source, &sink, 120).await;

        assert_eq!(report.published, 2);
        assert_eq!(report.stop, StopReason::PublishFailed);
        assert_eq!(sink.published_ids(), vec!["v1", "v2"]);
    }

    #[tokio::test]
    async fn empty_item_collection_with_cursor_continues() {
        // An empty (but present) collection is not the missing-items case;
        // the loop follows the cursor.
        let source = ScriptedSource::new(vec![page(&[], Some("p2")), page(&["v1"], None)]);
        let sink = VecSink::new();

        let report = run(&source, &sink, 120).await;

        assert_eq!(report.published, 1);
        assert_eq!(report.pages_fetched, 2);
        assert_eq!(report.stop, StopReason::CatalogExhausted);
    }
}
