//! Classification result assembled from the property checks and a fun fact.

use serde::Serialize;

use crate::number::{self, PROPERTY_NEGATIVE};

/// Evaluator output for a single integer, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberProfile {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<&'static str>,
    pub digit_sum: u64,
}

impl NumberProfile {
    /// Run every property check against `n`.
    ///
    /// `properties` is [`number::properties`] followed by `"negative"` when
    /// `n < 0`. Primality and perfection share one divisor scan, the only
    /// step whose cost grows with `sqrt(n)`.
    pub fn evaluate(n: i64) -> Self {
        let (is_prime, is_perfect) = number::prime_and_perfect(n);
        let mut properties = number::properties(n);
        if n < 0 {
            properties.push(PROPERTY_NEGATIVE);
        }

        Self {
            number: n,
            is_prime,
            is_perfect,
            properties,
            digit_sum: number::digit_sum(n),
        }
    }
}

/// Successful response body of `GET /api/classify-number`.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<String>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

impl ClassificationResult {
    pub fn new(profile: NumberProfile, fun_fact: String) -> Self {
        Self {
            number: profile.number,
            is_prime: profile.is_prime,
            is_perfect: profile.is_perfect,
            properties: profile.properties.into_iter().map(String::from).collect(),
            digit_sum: profile.digit_sum,
            fun_fact,
        }
    }
}
