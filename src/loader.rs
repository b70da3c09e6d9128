//! One-shot quote fetch.
//!
//! Every failure is logged and collapses to an empty collection; callers
//! never see an error from [`QuoteLoader::load`].

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::SourceConfig;
use crate::quotes::{QuoteCollection, QuotesPayload};
use crate::shutdown::ShutdownHandle;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    #[error("Quote source '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode quotes from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub struct QuoteLoader {
    client: Client,
    url: String,
    timeout: Option<Duration>,
}

impl QuoteLoader {
    pub fn new(source: &SourceConfig) -> Result<Self, FetchError> {
        let timeout = source.request_timeout_seconds.map(Duration::from_secs);
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: source.url.clone(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue the GET and decode `{ "quotes": [...] }` verbatim.
    pub async fn fetch(&self) -> Result<QuoteCollection, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;
        let payload: QuotesPayload =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
                url: self.url.clone(),
                source: e,
            })?;
        Ok(payload.quotes)
    }

    /// Fetch once. Consumes the loader so a second request cannot be issued.
    pub async fn load(self) -> QuoteCollection {
        match self.fetch().await {
            Ok(quotes) => {
                tracing::info!(url = %self.url, count = quotes.len(), "Loaded quotes");
                quotes
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch quotes");
                QuoteCollection::new()
            }
        }
    }

    fn request_error(&self, source: reqwest::Error) -> FetchError {
        match self.timeout {
            Some(timeout) if source.is_timeout() => FetchError::Timeout {
                url: self.url.clone(),
                seconds: timeout.as_secs(),
            },
            _ => FetchError::Request {
                url: self.url.clone(),
                source,
            },
        }
    }
}

/// Run the loader on `runtime` and hand the settled collection to `deliver`.
///
/// `deliver` is skipped when `shutdown` trips before the fetch settles, so
/// nothing is posted to a UI that is already gone.
pub fn spawn_load<F>(
    runtime: &Handle,
    loader: QuoteLoader,
    shutdown: ShutdownHandle,
    deliver: F,
) -> JoinHandle<()>
where
    F: FnOnce(QuoteCollection) + Send + 'static,
{
    runtime.spawn(async move {
        let quotes = tokio::select! {
            quotes = loader.load() => quotes,
            _ = shutdown.wait() => {
                tracing::debug!("Quote fetch abandoned: UI shut down");
                return;
            }
        };
        if shutdown.is_shutting_down() {
            tracing::debug!("Discarding settled quotes: UI shut down");
            return;
        }
        deliver(quotes);
    })
}
