use std::sync::Arc;

use numclass_facts::FactEnricher;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; nothing in it is mutated after startup. Configuration
/// is consumed while building the router and the fact client, not here.
#[derive(Clone)]
pub struct AppState {
    /// Fun-fact lookup backed by the numbers API.
    pub facts: Arc<FactEnricher>,
}
