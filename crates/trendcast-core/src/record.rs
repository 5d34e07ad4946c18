//! The normalized record published for each catalog item.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::catalog::RawCatalogItem;

/// The flattened, defaulted representation of one catalog item.
///
/// Every field is independently optional except the counters and list
/// fields, which default to 0 and empty respectively. `id` is the
/// catalog's stable identifier and the message's de-facto primary key;
/// uniqueness is not enforced here, so duplicates can occur across
/// invocations.
///
/// Field names on the wire follow the upstream catalog schema, including
/// the snake_case `thumbnail_*` keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: Option<String>,
    pub published_at: Option<String>,
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel_title: Option<String>,
    pub tags: Vec<String>,
    pub category_id: Option<String>,
    pub live_broadcast_content: Option<String>,
    pub default_audio_language: Option<String>,
    #[serde(rename = "thumbnail_default")]
    pub thumbnail_default: Option<String>,
    #[serde(rename = "thumbnail_medium")]
    pub thumbnail_medium: Option<String>,
    #[serde(rename = "thumbnail_high")]
    pub thumbnail_high: Option<String>,
    #[serde(rename = "thumbnail_standard")]
    pub thumbnail_standard: Option<String>,
    #[serde(rename = "thumbnail_maxres")]
    pub thumbnail_maxres: Option<String>,
    /// ISO-8601 duration encoding, passed through unparsed.
    pub duration: Option<String>,
    pub dimension: Option<String>,
    pub definition: Option<String>,
    /// Upstream boolean-as-string, preserved verbatim.
    pub caption: Option<String>,
    pub licensed_content: Option<bool>,
    pub view_count: u64,
    pub like_count: u64,
    pub favorite_count: u64,
    pub comment_count: u64,
    pub topic_categories: Vec<String>,
}

impl VideoRecord {
    /// Normalize one raw catalog item.
    ///
    /// Total over any input: absent sub-objects and leaf fields resolve to
    /// the field's default, and counter parse failures resolve to 0.
    pub fn from_raw(item: &RawCatalogItem) -> Self {
        let snippet = item.snippet();
        let statistics = item.statistics();
        let content = item.content_details();
        let topics = item.topic_details();
        let thumbnails = snippet.nested("thumbnails");

        Self {
            id: item.id().map(str::to_owned),
            published_at: snippet.text("publishedAt"),
            channel_id: snippet.text("channelId"),
            title: snippet.text("title"),
            description: snippet.text("description"),
            channel_title: snippet.text("channelTitle"),
            tags: snippet.text_list("tags"),
            category_id: snippet.text("categoryId"),
            live_broadcast_content: snippet.text("liveBroadcastContent"),
            default_audio_language: snippet.text("defaultAudioLanguage"),
            thumbnail_default: thumbnails.nested("default").text("url"),
            thumbnail_medium: thumbnails.nested("medium").text("url"),
            thumbnail_high: thumbnails.nested("high").text("url"),
            thumbnail_standard: thumbnails.nested("standard").text("url"),
            thumbnail_maxres: thumbnails.nested("maxres").text("url"),
            duration: content.text("duration"),
            dimension: content.text("dimension"),
            definition: content.text("definition"),
            caption: content.text("caption"),
            licensed_content: content.flag("licensedContent"),
            view_count: statistics.count("viewCount"),
            like_count: statistics.count("likeCount"),
            favorite_count: statistics.count("favoriteCount"),
            comment_count: statistics.count("commentCount"),
            topic_categories: topics.text_list("topicCategories"),
        }
    }

    /// Serialize the record as the UTF-8 JSON payload handed to the sink.
    pub fn to_payload(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
