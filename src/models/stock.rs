use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tradable instrument listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub stock_id: i64,
    pub ticker: String,
    pub company_name: String,
    /// Serialized as a JSON number, not a string
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 150.75)]
    pub price: Decimal,
}

impl Stock {
    /// Create a new stock
    pub fn new(stock_id: i64, ticker: &str, company_name: &str, price: Decimal) -> Self {
        Self {
            stock_id,
            ticker: ticker.to_string(),
            company_name: company_name.to_string(),
            price,
        }
    }

    /// The instruments every catalog starts with
    pub fn seed() -> Vec<Stock> {
        vec![
            Stock::new(1, "AAPL", "Apple Inc.", dec!(150.75)),
            Stock::new(2, "GOOGL", "Alphabet Inc.", dec!(2750.10)),
            Stock::new(3, "TSLA", "Tesla, Inc.", dec!(695.50)),
        ]
    }
}
