//! `OmdbClient` - OMDb API client implementation.

use std::fmt;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::api::LocalMovieApi;
use super::json::{Envelope, OmdbSearchResponse, OmdbTitleResponse, decode_envelope};
use super::reshape::{to_movie_detail, to_search_item};
use super::types::{MovieDetail, MovieId, SearchQuery, SearchResultItem};
use crate::result::ApiResult;

/// Default base URL for the OMDb API.
const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Message returned when a search fails below the provider.
pub const SEARCH_FAILURE_MESSAGE: &str = "An error occurred while fetching movies";

/// Message returned when a title lookup fails below the provider.
pub const DETAIL_FAILURE_MESSAGE: &str = "An error occurred while fetching movie details";

/// OMDb API client.
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API access key, sent as the `apikey` query parameter.
    api_key: String,
}

impl fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmdbClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Builder for `OmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl OmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API access key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<OmdbClient> {
        let api_key = self.api_key.context("api_key is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(OmdbClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl OmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> OmdbClientBuilder {
        OmdbClientBuilder::new()
    }

    /// Sends one GET with the access key plus `params` and decodes the body.
    ///
    /// The HTTP status is not used to decide the outcome: the provider
    /// answers some failures (bad key) with 4xx and a regular JSON body.
    #[instrument(skip_all)]
    async fn get_envelope<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Envelope<T>> {
        let request = self
            .http_client
            .get(self.base_url.clone())
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .build()
            .map_err(reqwest::Error::without_url)
            .context("failed to build request")?;

        tracing::debug!(?params, "OMDb API request");

        // The URL carries the access key; it must not reach error chains.
        let result = self.http_client.execute(request).await;
        let response = result
            .map_err(reqwest::Error::without_url)
            .context("request failed")?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "OMDb API answered with non-success status");
        }

        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("failed to read response body")?;
        decode_envelope(&body).with_context(|| format!("failed to decode response (HTTP {status})"))
    }
}

/// Folds a decoded envelope into the uniform result.
///
/// Transport errors are logged with their cause and replaced by `fallback`.
fn settle<T, U>(
    outcome: Result<Envelope<T>>,
    fallback: &str,
    reshape: impl FnOnce(T) -> U,
) -> ApiResult<U> {
    match outcome {
        Ok(Envelope::Found(payload)) => ApiResult::success(reshape(payload)),
        Ok(Envelope::NotFound(message)) => {
            tracing::debug!(%message, "OMDb API reported failure");
            ApiResult::provider_failure(message)
        }
        Err(e) => {
            tracing::error!(error = ?e, "OMDb API request failed");
            ApiResult::transport_failure(fallback)
        }
    }
}

impl LocalMovieApi for OmdbClient {
    #[instrument(skip_all, fields(query = %query))]
    async fn search_movies(&self, query: &SearchQuery) -> ApiResult<Vec<SearchResultItem>> {
        let params = [("s", query.as_str())];
        let outcome = self.get_envelope::<OmdbSearchResponse>(&params).await;

        settle(outcome, SEARCH_FAILURE_MESSAGE, |response| {
            tracing::debug!(
                total_results = response.total_results.as_deref().unwrap_or("-"),
                returned = response.search.len(),
                "OMDb search completed"
            );
            response
                .search
                .into_iter()
                .filter_map(to_search_item)
                .collect()
        })
    }

    #[instrument(skip_all, fields(id = %id))]
    async fn fetch_movie_detail(&self, id: &MovieId) -> ApiResult<MovieDetail> {
        let params = [("i", id.as_str()), ("plot", "full")];
        let outcome = self.get_envelope::<OmdbTitleResponse>(&params).await;

        settle(outcome, DETAIL_FAILURE_MESSAGE, to_movie_detail)
    }
}
