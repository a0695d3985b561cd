//! Fetch failure taxonomy
//!
//! Every way a top-posts fetch can fail collapses into one of four variants.
//! The `Display` strings are the exact messages shown to the user on stderr.

/// Why a fetch produced no posts
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Error: Too many requests. Reddit is rate-limiting us.")]
    RateLimited,

    #[error("Error: Subreddit 'r/{community}' not found.")]
    NotFound { community: String },

    #[error("HTTP Error: {code} {reason} for url: {url}")]
    Http {
        code: u16,
        reason: String,
        url: String,
    },

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Map an upstream HTTP status to a failure, if it is one
///
/// Only statuses in the 4xx and 5xx ranges are failures. `reason` is the
/// canonical reason phrase, when the status has one.
pub fn classify_status(
    code: u16,
    reason: Option<&str>,
    community: &str,
    url: &str,
) -> Option<FetchError> {
    match code {
        429 => Some(FetchError::RateLimited),
        404 => Some(FetchError::NotFound {
            community: community.to_string(),
        }),
        400..=599 => {
            let class = if code < 500 {
                "Client Error"
            } else {
                "Server Error"
            };
            Some(FetchError::Http {
                code,
                reason: reason.map_or_else(|| class.to_string(), |r| format!("{class}: {r}")),
                url: url.to_string(),
            })
        }
        _ => None,
    }
}
