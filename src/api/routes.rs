use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::store::MarketStore;

use super::handlers::*;
use super::openapi::ApiDoc;

/// Create the API router with Swagger UI
///
/// Every route sits behind the same panic guard, so an unexpected fault on
/// any path answers with the generic 500 body.
pub fn create_router(store: Arc<MarketStore>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        // Stock endpoints
        .route("/stocks", get(list_stocks))
        .route("/stocks/:ticker", get(get_stock_by_ticker))
        // Trade endpoints
        .route("/trades", post(submit_trade))
        .with_state(store)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}
