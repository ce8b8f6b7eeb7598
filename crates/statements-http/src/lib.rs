#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/statements/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! HTTP time-series provider.
//!
//! # Usage
//!
//! ```rust,ignore
//! use statements_http::HttpProvider;
//! use statements_core::{CompanyId, SeriesSource, TimeSeriesProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = HttpProvider::new("https://dashboard.example.com/api").with_token("secret");
//!
//!     let company = CompanyId::new("42");
//!     let raw = provider.fetch_series(&company, SeriesSource::Raw).await?;
//!     let summary = provider.fetch_evaluation_summary(&company).await?;
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use statements_core::{
    CompanyId, EvaluationSummary, Result, SeriesSource, StatementError, TimeSeriesProvider,
    TimeSeriesRecord,
};
use std::fmt;
use tracing::{debug, instrument};

/// Provider name used for cache namespacing and error messages.
const PROVIDER_NAME: &str = "http";

/// List payloads come either bare or wrapped in a `data` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListResponse<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListResponse<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

/// Parses a series list response body.
///
/// A `null` body or a `null` `data` field reads as an empty list.
///
/// # Errors
/// Returns [`StatementError::Parse`] if the body is not a list of records.
pub fn parse_series(body: &str) -> Result<Vec<TimeSeriesRecord>> {
    let parsed: Option<ListResponse<TimeSeriesRecord>> = serde_json::from_str(body)
        .or_else(|_| {
            // `{"data": null}` does not match either untagged arm
            serde_json::from_str::<serde_json::Value>(body).and_then(|value| match value {
                serde_json::Value::Object(ref map)
                    if map.get("data").is_some_and(serde_json::Value::is_null) =>
                {
                    Ok(None)
                }
                other => serde_json::from_value(other),
            })
        })
        .map_err(|e| StatementError::Parse(e.to_string()))?;

    Ok(parsed.map(ListResponse::into_vec).unwrap_or_default())
}

/// REST provider for company time series.
///
/// Provides access to:
/// - Raw, growth and metrics series per company
/// - The company's evaluation summary
#[derive(Clone)]
pub struct HttpProvider {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpProvider")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpProvider {
    /// Create a new provider for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a new provider with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token: None,
        }
    }

    /// Attach a bearer token to every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Returns the base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the series URL for a company and source.
    pub fn series_url(&self, company: &CompanyId, source: SeriesSource) -> String {
        format!(
            "{}/companies/{}/time-series?type={}",
            self.base_url,
            company.as_str(),
            source.as_str()
        )
    }

    /// Build the evaluation summary URL for a company.
    pub fn evaluation_summary_url(&self, company: &CompanyId) -> String {
        format!(
            "{}/companies/{}/evaluation-summary",
            self.base_url,
            company.as_str()
        )
    }

    /// Make a GET request and return the body of a successful response.
    async fn get_text(&self, url: &str, company: &CompanyId) -> Result<String> {
        if company.as_str().trim().is_empty() {
            return Err(StatementError::InvalidParameter(
                "company id must not be empty".to_string(),
            ));
        }
        debug!("HTTP request: {}", url);

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StatementError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(StatementError::RateLimited {
                provider: PROVIDER_NAME.to_string(),
                retry_after: None,
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(StatementError::CompanyNotFound(company.to_string()));
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(StatementError::Network(format!("HTTP {status}: {text}")));
        }

        response
            .text()
            .await
            .map_err(|e| StatementError::Network(e.to_string()))
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: DeserializeOwned>(&self, url: &str, company: &CompanyId) -> Result<T> {
        let text = self.get_text(url, company).await?;
        serde_json::from_str(&text).map_err(|e| StatementError::Parse(format!("{e}: {text}")))
    }
}

#[async_trait]
impl TimeSeriesProvider for HttpProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn description(&self) -> &str {
        "Dashboard REST service"
    }

    #[instrument(skip(self), fields(company = %company, source = %source))]
    async fn fetch_series(
        &self,
        company: &CompanyId,
        source: SeriesSource,
    ) -> Result<Vec<TimeSeriesRecord>> {
        let url = self.series_url(company, source);
        let text = self.get_text(&url, company).await?;
        let records = parse_series(&text)?;
        debug!("Fetched {} series records", records.len());
        Ok(records)
    }

    #[instrument(skip(self), fields(company = %company))]
    async fn fetch_evaluation_summary(&self, company: &CompanyId) -> Result<EvaluationSummary> {
        let url = self.evaluation_summary_url(company);
        self.get(&url, company).await
    }
}
