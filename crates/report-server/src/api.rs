use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use domain::{Report, ReportFilter, ReportStats};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Explicit HEAD handlers: axum would otherwise answer HEAD from the GET handler
    Router::new()
        .route(
            "/api/health",
            get(health).head(fallback).fallback(fallback),
        )
        .route(
            "/api/reports",
            get(list_reports)
                .post(create_report)
                .head(fallback)
                .fallback(fallback),
        )
        .route(
            "/api/stats",
            get(get_stats).head(fallback).fallback(fallback),
        )
        .route("/", get(index_page).head(fallback).fallback(fallback))
        .route(
            "/index.html",
            get(index_page).head(fallback).fallback(fallback),
        )
        .fallback(fallback)
        // Submissions are buffered whole, with no size cap
        .layer(DefaultBodyLimit::disable())
        // CORS headers go on every response, errors and 404s included
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn list_reports(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Report>>, ApiError> {
    let filter = ReportFilter::from_query_pairs(pairs);
    let reports = state.reports.query(&filter).await?;
    Ok(Json(reports))
}

async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<ReportStats>, ApiError> {
    let stats = state.reports.stats().await?;
    Ok(Json(stats))
}

async fn create_report(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let report = Report::from_json_body(&body)?;
    state.reports.insert(&report).await?;

    info!(report_id = %report.display_id(), "📄 Report stored");
    Ok((StatusCode::CREATED, Json(json!({ "ok": true }))))
}

async fn index_page(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read(&state.index_file).await {
        Ok(content) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            content,
        )
            .into_response(),
        Err(e) => {
            debug!(path = %state.index_file.display(), "Index page unavailable: {}", e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Preflight for any path answers 204; everything else unmatched is a bare 404.
async fn fallback(method: Method) -> StatusCode {
    if method == Method::OPTIONS {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
