//! Remote fetch capability.
//!
//! Collectors and scrapers only see the [`Fetch`] trait: "GET this URL with these
//! parameters, give me the body text". [`HttpFetcher`] is the blocking `reqwest`
//! implementation used by the binary; tests drive the same code with scripted bodies.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Browser-like agent; the calendar sites serve reduced markup to unknown clients.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("network access disabled for {url}")]
    Disabled { url: String },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// One GET request. Query pairs are appended URL-encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
    /// Charset used to decode the body when the server does not declare one.
    pub charset: Option<String>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            timeout: Duration::from_secs(30),
            charset: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_charset(mut self, charset: &str) -> Self {
        self.charset = Some(charset.to_string());
        self
    }

    /// Value of a query parameter, if present.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// `fetch(request) -> text`. Anything but HTTP 200 is an error.
pub trait Fetch {
    fn fetch(&self, request: &Request) -> Result<String, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, request: &Request) -> Result<String, FetchError> {
        (**self).fetch(request)
    }
}

/// Refuses every request. Used when a run must stay off the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl Fetch for Offline {
    fn fetch(&self, request: &Request) -> Result<String, FetchError> {
        Err(FetchError::Disabled {
            url: request.url.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, request: &Request) -> Result<String, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: request.url.clone(),
            source,
        };

        let mut builder = self.client.get(&request.url).timeout(request.timeout);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().map_err(transport)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: request.url.clone(),
            });
        }

        match request.charset.as_deref() {
            Some(charset) => response.text_with_charset(charset),
            None => response.text(),
        }
        .map_err(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_keeps_query_and_headers() {
        let request = Request::get("https://example.org/api")
            .with_query(vec![("sport".to_string(), "running".to_string())])
            .with_header("Accept", "application/json")
            .with_timeout(Duration::from_secs(5))
            .with_charset("euc-kr");

        assert_eq!(request.query_value("sport"), Some("running"));
        assert_eq!(request.query_value("country"), None);
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.timeout, Duration::from_secs(5));
        assert_eq!(request.charset.as_deref(), Some("euc-kr"));
    }
}
