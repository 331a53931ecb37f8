//! HTTP fetcher for the raw feed document.
//!
//! One GET per call, no retries and no caching. Any failure is returned as a
//! [`FeedError`] for the cycle runner to absorb.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::FeedError;

/// Anything that can produce the current feed document as text.
///
/// [`FeedClient`] is the production source; tests substitute scripted ones.
pub trait FeedSource {
    fn fetch(&self) -> impl Future<Output = Result<String, FeedError>> + Send;
}

/// HTTP client bound to a single feed URL.
pub struct FeedClient {
    client: Client,
    url: Url,
    timeout_secs: u64,
}

impl FeedClient {
    /// Creates a `FeedClient` for `feed_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] if `feed_url` does not parse or is
    /// not http(s), or [`FeedError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(feed_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        let url = Url::parse(feed_url).map_err(|e| FeedError::InvalidUrl {
            url: feed_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FeedError::InvalidUrl {
                url: feed_url.to_owned(),
                reason: format!("unsupported scheme \"{}\"", url.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url,
            timeout_secs,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Fetches the feed document and returns its body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Timeout`] if the request exceeds the configured timeout.
    /// - [`FeedError::UnexpectedStatus`] for any non-2xx status.
    /// - [`FeedError::NonText`] if the response declares a non-`text/*` content type.
    /// - [`FeedError::Decode`] if the body is not valid UTF-8.
    /// - [`FeedError::Http`] on any other network or TLS failure.
    pub async fn fetch_document(&self) -> Result<String, FeedError> {
        let url = self.url.to_string();

        let response = self
            .client
            .get(self.url.clone())
            .header(
                reqwest::header::ACCEPT,
                "text/markdown,text/plain;q=0.9,text/html;q=0.8",
            )
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_text_content_type(content_type) {
                return Err(FeedError::NonText {
                    content_type: content_type.to_owned(),
                    url,
                });
            }
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;
        String::from_utf8(bytes.to_vec()).map_err(|source| FeedError::Decode { url, source })
    }

    fn classify(&self, err: reqwest::Error) -> FeedError {
        if err.is_timeout() {
            FeedError::Timeout {
                url: self.url.to_string(),
                timeout_secs: self.timeout_secs,
            }
        } else {
            FeedError::Http(err)
        }
    }
}

impl FeedSource for FeedClient {
    fn fetch(&self) -> impl Future<Output = Result<String, FeedError>> + Send {
        self.fetch_document()
    }
}

fn is_text_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(str::trim)
        .is_some_and(|mime| mime.to_ascii_lowercase().starts_with("text/"))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
