//! Fact Enricher for number classification.
//!
//! [`NumbersApi`] talks to the upstream numeric-trivia service;
//! [`FactEnricher`] wraps it and never fails, degrading to fixed fallback
//! strings instead.

pub mod api;
pub mod enricher;

pub use api::{NumbersApi, NumbersApiError};
pub use enricher::{FactEnricher, FALLBACK_FACT, NEGATIVE_NUMBER_FACT};
