use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

/// A buy or sell recorded against a stock
///
/// The two identifiers are any non-zero JSON number, integer or not.
/// Quantity, side and date are carried exactly as the client sent them, and
/// are omitted from the JSON when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    #[schema(value_type = f64, example = 4)]
    pub trade_id: Number,
    /// Not checked against the catalog
    #[schema(value_type = f64, example = 1)]
    pub stock_id: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i64>, example = 10)]
    pub quantity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "buy")]
    pub trade_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "2024-08-10")]
    pub trade_date: Option<Value>,
}

impl Trade {
    /// Create a new trade with well-formed optional fields
    pub fn new(
        trade_id: i64,
        stock_id: i64,
        quantity: i64,
        trade_type: &str,
        trade_date: &str,
    ) -> Self {
        Self {
            trade_id: Number::from(trade_id),
            stock_id: Number::from(stock_id),
            quantity: Some(Value::from(quantity)),
            trade_type: Some(Value::from(trade_type)),
            trade_date: Some(Value::from(trade_date)),
        }
    }

    /// The trades every ledger starts with
    pub fn seed() -> Vec<Trade> {
        vec![
            Trade::new(1, 1, 10, "buy", "2024-08-07"),
            Trade::new(2, 2, 5, "sell", "2024-08-06"),
            Trade::new(3, 3, 7, "buy", "2024-08-05"),
        ]
    }

    /// Return this trade with its identifier bumped by exactly one.
    ///
    /// The ledger never stores the submitted identifier verbatim; it stores
    /// `trade_id + 1`. Returns `None` if the sum is not a finite number.
    pub fn with_incremented_id(self) -> Option<Self> {
        let trade_id = increment(&self.trade_id)?;
        Some(Self { trade_id, ..self })
    }
}

/// Add one to a JSON number, staying an integer while the sum fits in
/// `i64`/`u64` and falling back to `f64` beyond that.
fn increment(number: &Number) -> Option<Number> {
    if let Some(n) = number.as_i64() {
        if let Some(sum) = n.checked_add(1) {
            return Some(Number::from(sum));
        }
    }
    if let Some(n) = number.as_u64() {
        if let Some(sum) = n.checked_add(1) {
            return Some(Number::from(sum));
        }
    }
    Number::from_f64(number.as_f64()? + 1.0)
}
