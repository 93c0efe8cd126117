use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::{Map, Value};

use crate::models::Trade;
use crate::store::{MarketError, MarketStore};

use super::responses::*;

/// Shared application state
pub type AppState = Arc<MarketStore>;

/// Body of every 500 response. Fault details never reach the client.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error.";

fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(INTERNAL_SERVER_ERROR_MESSAGE)),
    )
        .into_response()
}

/// Convert MarketError to HTTP response
///
/// Validation failures go out as plain text, not-found as a JSON envelope,
/// anything else as the generic 500.
impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        if self.is_validation_error() {
            tracing::debug!("Rejected trade: {}", self);
            return (StatusCode::BAD_REQUEST, self.to_string()).into_response();
        }

        if self.is_not_found() {
            tracing::debug!("Not found: {:?}", self);
            return (StatusCode::NOT_FOUND, Json(ErrorResponse::new(self.to_string())))
                .into_response();
        }

        tracing::error!("Request failed: {}", self);
        internal_server_error()
    }
}

/// Turn a handler panic into the generic 500 response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    tracing::error!("Handler panicked: {}", detail);
    internal_server_error()
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// List every stock in the catalog
#[utoipa::path(
    get,
    path = "/stocks",
    tag = "Stocks",
    responses(
        (status = 200, description = "All stocks", body = StockListResponse),
        (status = 404, description = "Catalog is empty", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_stocks(
    State(store): State<AppState>,
) -> Result<Json<StockListResponse>, MarketError> {
    let stocks = store.catalog().list_all();

    if stocks.is_empty() {
        return Err(MarketError::EmptyCatalog);
    }

    Ok(Json(StockListResponse {
        stocks: stocks.to_vec(),
    }))
}

/// Look up a stock by its exact ticker
#[utoipa::path(
    get,
    path = "/stocks/{ticker}",
    tag = "Stocks",
    params(
        ("ticker" = String, Path, description = "Ticker symbol, case-sensitive (e.g., AAPL)")
    ),
    responses(
        (status = 200, description = "Stock found", body = StockResponse),
        (status = 404, description = "No stock with this ticker", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_stock_by_ticker(
    State(store): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<StockResponse>, MarketError> {
    let stock = store
        .catalog()
        .find_by_ticker(&ticker)
        .cloned()
        .ok_or(MarketError::StockNotFound(ticker))?;

    Ok(Json(StockResponse { stock }))
}

/// Record a new trade
///
/// The stored trade id is the submitted one plus one. A request without a
/// JSON content type is validated as an empty object.
#[utoipa::path(
    post,
    path = "/trades",
    tag = "Trades",
    request_body = Trade,
    responses(
        (status = 201, description = "Trade recorded", body = Trade),
        (status = 400, description = "Validation message (text/plain)", body = String),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn submit_trade(
    State(store): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Trade>), MarketError> {
    let candidate = match payload {
        Ok(Json(candidate)) => candidate,
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Map::new()),
        Err(rejection) => return Err(MarketError::MalformedBody(rejection.body_text())),
    };

    let trade = store.ledger().submit(&candidate)?;

    tracing::info!(trade_id = %trade.trade_id, stock_id = %trade.stock_id, "Trade submitted");

    Ok((StatusCode::CREATED, Json(trade)))
}
