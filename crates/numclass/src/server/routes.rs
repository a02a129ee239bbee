use crate::classify::classify_number_data;
use crate::facts::FactSource;
use axum::{
    extract::{Query, Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
        },
        HeaderValue, StatusCode,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use numclass_core::info::{build_info, Identity};
use numclass_core::response::ClassificationRequest;
use serde::Serialize;
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    identity: Arc<Identity>,
    facts: Arc<dyn FactSource>,
}

impl AppState {
    pub fn new(identity: Identity, facts: Arc<dyn FactSource>) -> Self {
        Self {
            identity: Arc::new(identity),
            facts,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(info_handler)
                .head(method_not_allowed)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/classify-number",
            get(classify_handler)
                .head(method_not_allowed)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type, Authorization"),
        ))
        .with_state(state)
}

async fn info_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, &build_info(&state.identity, Utc::now()))
}

async fn classify_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let request = ClassificationRequest::from_query_pairs(&pairs);
    let response = match classify_number_data(request.raw(), state.facts.as_ref()).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("{e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };
    let status =
        StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    json_response(status, &response)
}

/// CORS preflight, answered before any handler logic
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    log::debug!("{method} {uri} -> {}", response.status().as_u16());
    response
}

/// Serialize `body` as JSON, or answer 500 in plain text if that fails
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            log::error!("Error encoding JSON: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
