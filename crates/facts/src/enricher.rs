//! Failure-absorbing wrapper around [`NumbersApi`].

use crate::api::NumbersApi;

/// Returned when the upstream call fails for any reason.
pub const FALLBACK_FACT: &str = "Fun fact could not be retrieved.";

/// Returned for negative numbers; no upstream call is made.
pub const NEGATIVE_NUMBER_FACT: &str = "Fun facts are not available for negative numbers.";

/// Produces a fun fact for every integer, never an error.
#[derive(Debug, Clone)]
pub struct FactEnricher {
    api: NumbersApi,
}

impl FactEnricher {
    pub fn new(api: NumbersApi) -> Self {
        Self { api }
    }

    /// Fun fact for `number`.
    ///
    /// Negative numbers short-circuit to [`NEGATIVE_NUMBER_FACT`]. Upstream
    /// network errors, non-2xx statuses and malformed bodies are logged and
    /// replaced with [`FALLBACK_FACT`].
    pub async fn fun_fact(&self, number: i64) -> String {
        if number < 0 {
            return NEGATIVE_NUMBER_FACT.to_string();
        }

        match self.api.math_fact(number).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    number,
                    api_url = %self.api.api_url(),
                    error = %e,
                    "Fun fact unavailable, using fallback",
                );
                FALLBACK_FACT.to_string()
            }
        }
    }
}
