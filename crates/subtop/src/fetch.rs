use crate::prelude::{eprintln, *};
use log::debug;
use serde_json::Value;
use subtop_core::error::{classify_status, FetchError};
use subtop_core::listing::{build_top_url, transform_listing, PostRecord, TopQuery};

/// Reddit rejects anonymous clients with 429s, so every request identifies itself
pub const USER_AGENT: &str = concat!(
    "rust:subtop:v",
    env!("CARGO_PKG_VERSION"),
    " (command-line top posts fetcher)"
);

/// HTTP access to the listing endpoint
pub struct RedditClient {
    http: reqwest::Client,
    base_url: String,
}

impl RedditClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    pub fn url_for(&self, query: &TopQuery) -> String {
        build_top_url(&self.base_url, query)
    }

    /// Fetch one page of top posts, classifying every failure
    ///
    /// Issues exactly one GET. There is no retry and no timeout override.
    pub async fn fetch_top_posts(&self, query: &TopQuery) -> Result<Vec<PostRecord>, FetchError> {
        let url = self.url_for(query);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Unexpected(e.to_string()))?;

        let status = response.status();
        debug!("{url} responded with {status}");

        if let Some(err) = classify_status(
            status.as_u16(),
            status.canonical_reason(),
            &query.community,
            &url,
        ) {
            return Err(err);
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Unexpected(e.to_string()))?;
        let listing: Value =
            serde_json::from_str(&body).map_err(|e| FetchError::Unexpected(e.to_string()))?;

        let posts = transform_listing(&listing);
        debug!("r/{} returned {} posts", query.community, posts.len());

        Ok(posts)
    }

    /// Fetch top posts, reporting any failure on stderr
    ///
    /// Never fails: every error is written to stderr and becomes an empty list.
    pub async fn top_posts(&self, query: &TopQuery) -> Vec<PostRecord> {
        match self.fetch_top_posts(query).await {
            Ok(posts) => posts,
            Err(err) => {
                eprintln!("{err}");
                Vec::new()
            }
        }
    }
}
