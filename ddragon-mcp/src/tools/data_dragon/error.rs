//! Error types for the Data Dragon feed.

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Feed returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed feed body from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FeedError {
    /// Short failure class for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::Timeout { .. } => "timeout",
            FeedError::Request { .. } => "request",
            FeedError::Status { .. } => "status",
            FeedError::Decode { .. } => "decode",
        }
    }

    /// Classify a transport error, separating timeouts from other failures
    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FeedError::Timeout {
                url: url.to_string(),
            }
        } else {
            FeedError::Request {
                url: url.to_string(),
                source,
            }
        }
    }
}
