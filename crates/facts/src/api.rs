//! REST client for the numeric-trivia ("numbers API") service.
//!
//! Only the math-fact endpoint is used: `GET {base}/{number}/math?json`,
//! which answers with a JSON object carrying the fact in `text`.

use std::time::Duration;

use serde::Deserialize;

/// Default upstream base URL.
pub const DEFAULT_NUMBERS_API_URL: &str = "http://numbersapi.com";

/// HTTP client for the numbers API.
#[derive(Debug, Clone)]
pub struct NumbersApi {
    client: reqwest::Client,
    api_url: String,
}

/// Subset of the math-fact payload that we consume.
#[derive(Debug, Deserialize)]
struct MathFact {
    text: Option<String>,
}

/// Errors from the numbers API layer.
#[derive(Debug, thiserror::Error)]
pub enum NumbersApiError {
    /// The HTTP request itself failed (network, DNS, timeout, bad body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Numbers API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response was JSON but had no usable `text` field.
    #[error("Numbers API response has no fact text")]
    MissingText,
}

impl NumbersApi {
    /// Create a client for `api_url` whose requests give up after `timeout`.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://numbersapi.com`. A trailing
    ///   slash is tolerated.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, NumbersApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the math fact for `number`.
    pub async fn math_fact(&self, number: i64) -> Result<String, NumbersApiError> {
        let response = self
            .client
            .get(format!("{}/{}/math?json", self.api_url, number))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let fact: MathFact = response.json().await?;

        match fact.text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(NumbersApiError::MissingText),
        }
    }

    /// Return the response unchanged on success, or an
    /// [`NumbersApiError::ApiError`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, NumbersApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(NumbersApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
