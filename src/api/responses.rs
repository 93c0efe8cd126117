use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Stock;

/// Full catalog listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StockListResponse {
    pub stocks: Vec<Stock>,
}

/// A single catalog entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StockResponse {
    pub stock: Stock,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "No stock found with this ticker")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
