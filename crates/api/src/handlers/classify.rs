//! Handler for `GET /api/classify-number`.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, RawQuery, State};
use axum::Json;
use numclass_core::classification::{ClassificationResult, NumberProfile};
use numclass_core::input::ClassificationRequest;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/classify-number?number={n}
///
/// Parse `number`, evaluate its properties, attach a fun fact and return the
/// classification. Upstream fact failures never fail the request.
pub async fn classify_number(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    query: Result<Query<ClassificationRequest>, QueryRejection>,
) -> AppResult<Json<ClassificationResult>> {
    let Query(request) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected classify query string");
        AppError::MalformedQuery {
            query: raw_query.unwrap_or_default(),
            reason: rejection.body_text(),
        }
    })?;

    let number = request.parse()?;

    // Trial division over 64-bit inputs is CPU-bound.
    let profile = tokio::task::spawn_blocking(move || NumberProfile::evaluate(number))
        .await
        .map_err(|e| AppError::Internal(format!("Property evaluation failed: {e}")))?;

    let fun_fact = state.facts.fun_fact(number).await;
    let result = ClassificationResult::new(profile, fun_fact);

    tracing::debug!(
        number,
        properties = ?result.properties,
        "Classified number"
    );

    Ok(Json(result))
}
