//! Trade validation functions
//!
//! A candidate trade arrives as raw JSON. Only `tradeId` and `stockId` are
//! checked; everything else is carried through untouched.

use serde_json::{Number, Value};

use crate::models::Trade;

use super::errors::MarketError;

// ============================================================================
// Individual Validation Functions
// ============================================================================

/// Read a field as a non-zero numeric identifier.
///
/// Absent, `null`, non-numeric and zero values all count as missing. Any other
/// number is accepted as-is, including fractions, negatives and values past
/// `i64::MAX`.
fn required_id(candidate: &Value, field: &str) -> Option<Number> {
    let number = candidate.get(field)?.as_number()?;

    if number.as_f64() == Some(0.0) {
        return None;
    }

    Some(number.clone())
}

/// Validate the trade identifier of a candidate
pub fn validate_trade_id(candidate: &Value) -> Result<Number, MarketError> {
    required_id(candidate, "tradeId").ok_or(MarketError::MissingTradeId)
}

/// Validate the stock identifier of a candidate
///
/// The id is not checked against the catalog.
pub fn validate_stock_id(candidate: &Value) -> Result<Number, MarketError> {
    required_id(candidate, "stockId").ok_or(MarketError::MissingStockId)
}

// ============================================================================
// Composite Validation Function
// ============================================================================

/// Validate a candidate trade and build the record it describes.
///
/// Checks run in order and the first failure wins:
/// 1. `tradeId` must be a non-zero number
/// 2. `stockId` must be a non-zero number
///
/// A candidate that is not a JSON object has no fields and fails check 1.
pub fn validate_trade(candidate: &Value) -> Result<Trade, MarketError> {
    let trade_id = validate_trade_id(candidate)?;
    let stock_id = validate_stock_id(candidate)?;

    Ok(Trade {
        trade_id,
        stock_id,
        quantity: candidate.get("quantity").cloned(),
        trade_type: candidate.get("tradeType").cloned(),
        trade_date: candidate.get("tradeDate").cloned(),
    })
}

// ============================================================================
// Tests
// ============================================================================
