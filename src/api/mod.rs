//! HTTP surface of the company data service
//!
//! Routing and wire encoding only — all lookup semantics live in
//! `data::query_engine`. Exactly two read-only routes are exposed.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use crate::data::query_engine::QueryEngine;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QueryEngine>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/company_data/find/:company_text", get(find_company))
        .route("/company_data/:id", get(get_company))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// `GET /company_data/find/{text}` — ticker or name lookup.
///
/// A hit answers with the matched record's id as a bare integer body; a
/// miss is a 404 with no body.
async fn find_company(
    State(state): State<AppState>,
    Path(company_text): Path<String>,
) -> Response {
    match state.engine.find_by_ticker_or_name(&company_text) {
        Ok(Some(record)) => Json(record.id).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => dataset_unavailable(err),
    }
}

/// `GET /company_data/{id}` — exact id lookup, full JSON record on a hit.
///
/// A non-integer `{id}` never reaches the engine; the extractor rejects it.
async fn get_company(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.engine.find_by_id(id) {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => dataset_unavailable(err),
    }
}

/// The service cannot answer anything without its dataset.
fn dataset_unavailable(err: anyhow::Error) -> Response {
    error!("Dataset unavailable: {:#}", err);
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
