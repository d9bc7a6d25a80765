//! Profile page fetching.
//!
//! `HttpFetcher` is the production client; `FakeFetcher` serves canned
//! pages so the collector and server can be tested without the network.

use async_trait::async_trait;
use ow_common::ErrorKind;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("no profile at {0}")]
    NotFound(String),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {0} timed out")]
    Timeout(String),

    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::NotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Transient,
        }
    }

    fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(url.to_string())
        } else {
            FetchError::Transport {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// Headers a desktop browser sends; the career site serves a reduced page
/// to obvious bots.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the document at `url` as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(browser_headers())
            .gzip(true)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching profile page: {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(FetchError::NotFound(url.to_string())),
            status => {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                })
            }
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))
    }
}

/// Canned responses keyed by URL. Unknown URLs answer `NotFound`.
#[derive(Default)]
pub struct FakeFetcher {
    pages: Mutex<HashMap<String, Result<String, FetchError>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, html: &str) -> Self {
        self.set(url, Ok(html.to_string()));
        self
    }

    pub fn with_error(self, url: &str, err: FetchError) -> Self {
        self.set(url, Err(err));
        self
    }

    pub fn set(&self, url: &str, response: Result<String, FetchError>) {
        if let Ok(mut pages) = self.pages.lock() {
            pages.insert(url.to_string(), response);
        }
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_string());
        }
        self.pages
            .lock()
            .ok()
            .and_then(|pages| pages.get(url).cloned())
            .unwrap_or_else(|| Err(FetchError::NotFound(url.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            FetchError::NotFound("u".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(FetchError::Timeout("u".into()).kind(), ErrorKind::Transient);
        assert_eq!(
            FetchError::Status {
                url: "u".into(),
                status: 503
            }
            .kind(),
            ErrorKind::Transient
        );
    }

    #[test]
    fn test_browser_headers() {
        let headers = browser_headers();
        assert!(headers[USER_AGENT].to_str().unwrap().starts_with("Mozilla/5.0"));
        assert!(headers.contains_key(ACCEPT_LANGUAGE));
    }

    #[tokio::test]
    async fn test_fake_fetcher() {
        let fake = FakeFetcher::new()
            .with_page("https://x/career/a/", "<html></html>")
            .with_error("https://x/career/b/", FetchError::Timeout("https://x/career/b/".into()));

        assert_eq!(fake.fetch("https://x/career/a/").await.unwrap(), "<html></html>");
        assert!(matches!(
            fake.fetch("https://x/career/b/").await,
            Err(FetchError::Timeout(_))
        ));
        assert!(matches!(
            fake.fetch("https://x/career/c/").await,
            Err(FetchError::NotFound(_))
        ));
        assert_eq!(fake.calls().len(), 3);
    }
}
