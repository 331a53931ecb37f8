use thiserror::Error;

/// Failure to obtain the feed document for one cycle.
///
/// Every variant is recoverable: the cycle becomes a no-op and the next
/// scheduled cycle tries again.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("non-text response from {url} (content-type: {content_type})")]
    NonText { content_type: String, url: String },

    #[error("response body from {url} is not valid UTF-8: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid feed URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
