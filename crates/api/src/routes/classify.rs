//! Route definitions for number classification.

use axum::routing::get;
use axum::Router;

use crate::handlers::{classify, not_found::not_found};
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// GET /classify-number?number={n}   -> classify_number
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/classify-number",
        get(classify::classify_number).fallback(not_found),
    )
}
