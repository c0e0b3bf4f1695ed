// HTTP request handlers
use crate::domain::filter::FilterSelection;
use crate::infrastructure::chunked_json::chunked_response;
use crate::infrastructure::html_renderer::render_html;
use crate::infrastructure::http_response::{
    accepts_brotli, encoded_response, CONTENT_TYPE_HTML, CONTENT_TYPE_JSON,
};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Raw query pairs; browsers repeat keys for multi-selects.
pub type FilterQuery = Vec<(String, String)>;

/// Build a selection from `date_range`, `region` and `property_type` pairs.
/// Repeated keys and comma-separated values both accumulate.
pub fn selection_from_query(pairs: &[(String, String)]) -> FilterSelection {
    let mut selection = FilterSelection::default();
    for (key, raw) in pairs {
        let mut values = raw
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        match key.as_str() {
            "date_range" => {
                if selection.date_range.is_none() {
                    selection.date_range = values.next();
                }
            }
            "region" => selection.regions.extend(values),
            "property_type" => selection.property_types.extend(values),
            other => tracing::debug!("Ignoring unknown query parameter {}", other),
        }
    }
    selection
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full HTML dashboard page
pub async fn dashboard_page(
    Query(query): Query<FilterQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let selection = selection_from_query(&query);

    match state.dashboard_service.get_dashboard(&selection).await {
        Ok(dashboard) => {
            let html = render_html(&dashboard);
            match encoded_response(html.into_bytes(), CONTENT_TYPE_HTML, accepts_brotli(&headers)).await {
                Ok(response) => response,
                Err(status) => status.into_response(),
            }
        }
        Err(e) => {
            tracing::error!("Error rendering dashboard page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Dashboard directives as a single JSON document
pub async fn dashboard_json(
    Query(query): Query<FilterQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let selection = selection_from_query(&query);

    let dashboard = match state.dashboard_service.get_dashboard(&selection).await {
        Ok(dashboard) => dashboard,
        Err(e) => {
            tracing::error!("Error building dashboard: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let body = match serde_json::to_vec(&dashboard) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Dashboard serialization error: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match encoded_response(body, CONTENT_TYPE_JSON, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Stream directives one chunk at a time (progressive loading)
pub async fn stream_dashboard(
    Query(query): Query<FilterQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let selection = selection_from_query(&query);
    let rx = state.streaming_service.stream_dashboard(selection);
    chunked_response(rx, accepts_brotli(&headers))
}
