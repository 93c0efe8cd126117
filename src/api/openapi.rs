use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::responses::*;
use crate::models::{Stock, Trade};

/// OpenAPI specification
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock Trades API",
        version = "1.0.0",
        description = "In-memory stock catalog and trade ledger",
        license(
            name = "MIT"
        )
    ),
    paths(
        handlers::health_check,
        handlers::list_stocks,
        handlers::get_stock_by_ticker,
        handlers::submit_trade,
    ),
    components(
        schemas(
            Stock,
            Trade,
            StockListResponse,
            StockResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Stocks", description = "Stock catalog endpoints"),
        (name = "Trades", description = "Trade recording endpoints"),
    )
)]
pub struct ApiDoc;
