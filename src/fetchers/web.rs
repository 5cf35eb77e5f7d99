use crate::config::ExtractorConfig;
use crate::errors::FetchError;
use crate::fetchers::Fetcher;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP(S) fetcher over a shared `reqwest` client.
///
/// Every request is bounded by the configured timeout. Bodies are decoded
/// using the response charset and returned as UTF-8.
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: Client,
    timeout: Duration,
}

impl WebFetcher {
    /// Build a fetcher from the extractor configuration
    pub fn new(config: &ExtractorConfig) -> Result<Self, FetchError> {
        let timeout = Duration::from_secs(config.fetch_timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, timeout })
    }

    fn timeout_error(&self, url: &Url) -> FetchError {
        FetchError::Timeout {
            url: url.to_string(),
            secs: self.timeout.as_secs(),
        }
    }
}

/// Parse the URL and make sure it is something we can fetch over HTTP
pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

#[async_trait]
impl Fetcher for WebFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = validate_url(url)?;
        ::log::debug!("Fetching {}", url);

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Err(self.timeout_error(&url)),
            Err(e) => return Err(e.into()),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Err(self.timeout_error(&url)),
            Err(e) => return Err(e.into()),
        };

        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.into_bytes())
    }
}
