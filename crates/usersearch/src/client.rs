use log::{debug, warn};
use usersearch_core::error::{SearchError, TransportError};
use usersearch_core::model::{SearchRequest, SearchResponse, ACCESS_TOKEN_HEADER};
use usersearch_core::search::{interpret_response, prepare, wire_params};

use crate::config::{ClientConfig, ConfigError};

/// Client for the search users endpoint
///
/// Cheap to clone: clones share one connection pool. Holds no mutable state, so
/// concurrent calls from several tasks are independent of each other.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SearchClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        debug!("SearchClient created for {}", config.base_url);

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run one search call.
    ///
    /// Negative `limit` or `offset` fail before any connection is made. Otherwise
    /// exactly one GET is issued and its outcome classified; nothing is retried.
    /// Dropping the returned future aborts the request.
    pub async fn find_users(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, SearchError> {
        let prepared = prepare(request, self.config.max_page_size)?;
        let params = wire_params(&prepared);
        let url = reqwest::Url::parse_with_params(&self.config.base_url, &params)
            .map_err(|e| {
                warn!("Invalid search server URL {}: {e}", self.config.base_url);
                SearchError::Transport(TransportError::Other(e.to_string()))
            })?;
        let encoded = url.query().unwrap_or_default().to_string();

        debug!(
            "GET {} limit={} offset={}",
            self.config.base_url, prepared.probe_limit, prepared.offset
        );

        let response = self
            .http
            .get(url)
            .header(ACCESS_TOKEN_HEADER, &self.config.access_token)
            .send()
            .await
            .map_err(|e| transport_error(e, &encoded))?;

        let status = response.status().as_u16();
        debug!("Search server answered with status {status}");

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, &encoded))?;

        let outcome = interpret_response(&prepared, status, &body);
        if let Err(err) = &outcome {
            warn!("Search failed with status {status}: {err}");
        }

        outcome
    }
}

/// `encoded` is the URL-encoded query string the request was sent with.
fn transport_error(err: reqwest::Error, encoded: &str) -> SearchError {
    let err = if err.is_timeout() {
        TransportError::Timeout(encoded.to_string())
    } else {
        TransportError::Other(err.to_string())
    };
    warn!("Search request did not complete: {err}");

    SearchError::Transport(err)
}
