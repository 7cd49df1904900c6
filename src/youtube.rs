use log::debug;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Upper bound on results taken from the first search page
pub const MAX_RESULTS: u32 = 20;

const USER_AGENT: &str = concat!("yt-search/", env!("CARGO_PKG_VERSION"));

/// One video returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
}

/// Statistics and length for a single video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetails {
    pub view_count: u64,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
    pub duration: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    channel_title: String,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    #[serde(default)]
    statistics: Statistics,
    content_details: ContentDetails,
}

/// Counts arrive as decimal strings
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
    comment_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: u16,
    message: String,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    reason: String,
}

impl ApiError {
    fn describe(&self) -> String {
        match self.errors.first() {
            Some(detail) => format!("{} ({}, {})", self.message, self.code, detail.reason),
            None => format!("{} ({})", self.message, self.code),
        }
    }
}

impl VideoItem {
    fn into_details(self) -> Result<VideoDetails> {
        Ok(VideoDetails {
            view_count: parse_count(self.statistics.view_count.as_deref())?.unwrap_or(0),
            like_count: parse_count(self.statistics.like_count.as_deref())?,
            comment_count: parse_count(self.statistics.comment_count.as_deref())?,
            duration: self.content_details.duration,
        })
    }
}

fn parse_count(value: Option<&str>) -> Result<Option<u64>> {
    value
        .map(|v| {
            v.trim()
                .parse::<u64>()
                .map_err(|_| Error::Parse(format!("invalid count '{}'", v)))
        })
        .transpose()
}

/// YouTube Data API v3 client
pub struct YouTube {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTube {
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search for videos matching `keyword`, first page only.
    ///
    /// Items without a video id are dropped; order is as returned.
    pub async fn search(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        debug!("search: q='{}', maxResults={}", keyword, MAX_RESULTS);

        let max_results = MAX_RESULTS.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "id,snippet"),
                ("q", keyword),
                ("type", "video"),
                ("maxResults", &max_results),
                ("key", &self.api_key),
            ])
            .send()
            .await?;

        let body: SearchResponse = decode(response).await?;

        let results: Vec<SearchResult> = body
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(SearchResult {
                    video_id,
                    title: item.snippet.title,
                    channel_title: item.snippet.channel_title,
                })
            })
            .collect();

        debug!("search: {} result(s) for '{}'", results.len(), keyword);
        Ok(results)
    }

    /// Fetch statistics and duration for one video.
    ///
    /// Returns `None` when the video is no longer available.
    pub async fn video_details(&self, video_id: &str) -> Result<Option<VideoDetails>> {
        debug!("videos: id={}", video_id);

        let response = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "statistics,contentDetails"),
                ("id", video_id),
                ("key", &self.api_key),
            ])
            .send()
            .await?;

        let body: VideosResponse = decode(response).await?;

        body.items
            .into_iter()
            .next()
            .map(VideoItem::into_details)
            .transpose()
    }
}

/// Turn a non-success status into `Error::Api`, otherwise parse the body as JSON
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorEnvelope>(&text) {
            Ok(envelope) => envelope.error.describe(),
            Err(_) => status.to_string(),
        };
        return Err(Error::Api(message));
    }

    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
