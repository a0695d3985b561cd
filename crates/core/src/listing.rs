use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Web origin prefixed to every relative permalink
pub const REDDIT_ORIGIN: &str = "https://www.reddit.com";

/// Default number of posts requested
pub const DEFAULT_LIMIT: i64 = 3;

/// Ranking window of the "top" listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Hour => "hour",
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
            TimeWindow::All => "all",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(TimeWindow::Hour),
            "day" => Ok(TimeWindow::Day),
            "week" => Ok(TimeWindow::Week),
            "month" => Ok(TimeWindow::Month),
            "year" => Ok(TimeWindow::Year),
            "all" => Ok(TimeWindow::All),
            other => Err(format!(
                "Invalid time window: {other}. Valid windows: hour, day, week, month, year, all"
            )),
        }
    }
}

/// Parameters of a single top-posts request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopQuery {
    pub community: String,
    pub limit: i64,
    pub window: TimeWindow,
}

impl TopQuery {
    pub fn new(community: impl Into<String>, limit: i64) -> Self {
        Self {
            community: community.into(),
            limit,
            window: TimeWindow::default(),
        }
    }

    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }
}

/// Simplified post produced from one listing item
///
/// Optional fields hold whatever JSON value the upstream item carried, so a
/// title of `42` or a score of `12.0` survives untouched. Field order is the
/// JSON key order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PostRecord {
    pub title: Option<Value>,
    pub author: Option<Value>,
    pub score: Option<Value>,
    pub url: Option<Value>,
    pub permalink: String,
}

/// Build the listing URL for a query against `base`
///
/// The community name is not validated or escaped; an invalid name is
/// reported by the upstream service.
pub fn build_top_url(base: &str, query: &TopQuery) -> String {
    format!(
        "{}/r/{}/top.json?limit={}&t={}",
        base.trim_end_matches('/'),
        query.community,
        query.limit,
        query.window
    )
}

/// Transform a decoded listing body into post records
///
/// Navigates `data.children[*].data`. A missing key or unexpected type at
/// any level above the children yields no records.
pub fn transform_listing(body: &Value) -> Vec<PostRecord> {
    body.get("data")
        .and_then(|data| data.get("children"))
        .and_then(Value::as_array)
        .map(|children| {
            children
                .iter()
                .map(|child| transform_item(child.get("data").unwrap_or(&Value::Null)))
                .collect()
        })
        .unwrap_or_default()
}

/// Transform one listing item's `data` object into a post record
pub fn transform_item(item: &Value) -> PostRecord {
    PostRecord {
        title: raw_field(item, "title"),
        author: raw_field(item, "author"),
        score: raw_field(item, "score"),
        url: raw_field(item, "url"),
        permalink: format!(
            "{REDDIT_ORIGIN}{}",
            raw_field(item, "permalink")
                .as_ref()
                .map(display_value)
                .unwrap_or_default()
        ),
    }
}

/// Render a passed-through value for humans: strings without quotes,
/// everything else as compact JSON
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn raw_field(item: &Value, key: &str) -> Option<Value> {
    item.get(key).filter(|v| !v.is_null()).cloned()
}
