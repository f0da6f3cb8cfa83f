//! HTTP Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use checkout_payments::{PaymentError, Selection, SessionRequest};

use crate::state::AppState;

/// User-facing text in every 500 envelope
pub const INTERNAL_ERROR: &str = "内部エラー";

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub gateway: String,
    pub catalog_size: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        gateway: state.gateway.name().to_string(),
        catalog_size: state.catalog.len(),
    })
}

/// Resolve `?plan=…&option=…` and redirect to Stripe Checkout
///
/// Mounted for every method; anything but GET is answered with an empty 405
/// before the gateway is touched.
pub async fn checkout(
    method: Method,
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    if method != Method::GET {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    let selection = Selection::from_pairs(params);

    let location = start_session(&state, &selection).await.map_err(|e| {
        tracing::error!(error = ?e, plan = ?selection.plan, option = ?selection.option, "Checkout error: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: INTERNAL_ERROR.into(),
                message: e.to_string(),
            }),
        )
    })?;

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}

async fn start_session(state: &AppState, selection: &Selection) -> checkout_payments::Result<HeaderValue> {
    let line_items = state.catalog.resolve(selection);
    let request = SessionRequest::card_payment(line_items, &state.redirect_urls);

    let session = state.gateway.create_session(&request).await?;
    let url = session.url.ok_or(PaymentError::MissingRedirectUrl)?;

    HeaderValue::try_from(url).map_err(|e| PaymentError::Gateway(format!("Invalid redirect URL: {e}")))
}
