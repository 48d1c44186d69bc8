//! Data Dragon feed client.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::DataDragonConfig;
use crate::error::ServiceResult;

use super::error::FeedError;
use super::responses::{ChampionIndex, ChampionRecord, FeedDocument};

/// Fetches a URL and parses the body as JSON.
///
/// Implementations must treat non-2xx statuses as failures.
pub trait FeedTransport: Send + Sync {
    fn get_json(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<serde_json::Value, FeedError>> + Send;
}

/// reqwest-backed transport with a fixed timeout and static headers
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

impl FeedTransport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FeedError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FeedError::from_reqwest(url, e))?;
        serde_json::from_slice(&body).map_err(|source| FeedError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Gateway to the versioned, locale-pinned Data Dragon data files
pub struct DataDragonClient<T = HttpTransport> {
    transport: T,
    data_url: String,
}

impl DataDragonClient<HttpTransport> {
    /// Create a client backed by a real HTTP transport
    pub fn from_config(config: &DataDragonConfig) -> ServiceResult<Self> {
        let transport =
            HttpTransport::new(Duration::from_secs(config.timeout_secs), &config.user_agent)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: FeedTransport> DataDragonClient<T> {
    pub fn with_transport(transport: T, config: &DataDragonConfig) -> Self {
        let data_url = format!(
            "{}/cdn/{}/data/{}",
            config.base_url.trim_end_matches('/'),
            config.version,
            config.locale
        );
        Self {
            transport,
            data_url,
        }
    }

    /// URL of the full document for a single champion
    pub fn champion_url(&self, name: &str) -> String {
        format!(
            "{}/champion/{}.json",
            self.data_url,
            urlencoding::encode(name)
        )
    }

    /// URL of the summary index of every champion
    pub fn index_url(&self) -> String {
        format!("{}/champion.json", self.data_url)
    }

    /// GET a feed URL, returning the parsed body or the classified failure
    pub async fn fetch(&self, url: &str) -> Result<serde_json::Value, FeedError> {
        match self.transport.get_json(url).await {
            Ok(value) => {
                debug!(url = %url, "Feed request succeeded");
                Ok(value)
            }
            Err(e) => {
                warn!(url = %url, kind = e.kind(), error = %e, "Feed request failed");
                Err(e)
            }
        }
    }

    /// Fetch a champion's full record.
    ///
    /// Returns `Ok(None)` when the document does not contain `name` as a key.
    pub async fn champion(&self, name: &str) -> Result<Option<ChampionRecord>, FeedError> {
        let url = self.champion_url(name);
        let value = self.fetch(&url).await?;
        let mut document: FeedDocument<HashMap<String, ChampionRecord>> = decode(&url, value)?;
        Ok(document.data.remove(name))
    }

    /// Fetch the index of every champion
    pub async fn champion_index(&self) -> Result<ChampionIndex, FeedError> {
        let url = self.index_url();
        let value = self.fetch(&url).await?;
        let document: FeedDocument<ChampionIndex> = decode(&url, value)?;
        Ok(document.data)
    }
}

fn decode<D: DeserializeOwned>(url: &str, value: serde_json::Value) -> Result<D, FeedError> {
    serde_json::from_value(value).map_err(|source| {
        warn!(url = %url, error = %source, "Feed body has unexpected shape");
        FeedError::Decode {
            url: url.to_string(),
            source,
        }
    })
}
