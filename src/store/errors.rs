//! Error types for catalog and ledger operations

use serde_json::Number;
use thiserror::Error;

/// Errors that can occur while reading the catalog or recording trades
///
/// The display strings are the messages clients see, so they must stay
/// byte-for-byte stable.
///
/// # Error Categories
///
/// - **Validation Errors**: `MissingTradeId`, `MissingStockId`, `MalformedBody`
/// - **Not Found**: `EmptyCatalog`, `StockNotFound`
/// - **Internal Errors**: `TradeIdOverflow`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarketError {
    /// Candidate trade has no usable `tradeId`
    #[error("Trade Id is required and should be a number.")]
    MissingTradeId,

    /// Candidate trade has no usable `stockId`
    #[error("Stock Id is required and should be a number.")]
    MissingStockId,

    /// Request body could not be parsed as JSON
    #[error("{0}")]
    MalformedBody(String),

    /// The catalog holds no stocks at all
    #[error("No Stocks found.")]
    EmptyCatalog,

    /// No stock carries the requested ticker
    #[error("No stock found with this ticker")]
    StockNotFound(String),

    /// Incrementing the submitted trade id does not yield a finite number
    #[error("Trade id {0} cannot be incremented")]
    TradeIdOverflow(Number),
}

impl MarketError {
    /// Returns true if the client sent an unusable payload
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            MarketError::MissingTradeId | MarketError::MissingStockId | MarketError::MalformedBody(_)
        )
    }

    /// Returns true if the requested data does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, MarketError::EmptyCatalog | MarketError::StockNotFound(_))
    }
}
