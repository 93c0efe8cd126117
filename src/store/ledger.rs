//! Append-only trade ledger

use parking_lot::RwLock;
use serde_json::Value;

use crate::models::Trade;

use super::errors::MarketError;
use super::validation::validate_trade;

/// Thread-safe, append-only sequence of trades
///
/// The id bump works on the caller's own trade and touches no shared state;
/// the push happens under the write guard, so concurrent appends cannot lose
/// records.
#[derive(Debug, Default)]
pub struct Ledger {
    trades: RwLock<Vec<Trade>>,
}

impl Ledger {
    /// Create a ledger holding exactly the given trades
    pub fn new(trades: Vec<Trade>) -> Self {
        Self {
            trades: RwLock::new(trades),
        }
    }

    /// Create the ledger the service starts with
    pub fn seeded() -> Self {
        Self::new(Trade::seed())
    }

    /// Validate a raw candidate without touching the ledger
    pub fn validate(&self, candidate: &Value) -> Result<Trade, MarketError> {
        validate_trade(candidate)
    }

    /// Store a trade and return the stored record.
    ///
    /// The stored id is the submitted id plus one. The trade is assumed to
    /// have been validated already; no uniqueness check is made.
    pub fn append(&self, trade: Trade) -> Result<Trade, MarketError> {
        let submitted_id = trade.trade_id.clone();
        let stored = trade
            .with_incremented_id()
            .ok_or(MarketError::TradeIdOverflow(submitted_id))?;

        self.trades.write().push(stored.clone());

        tracing::debug!(
            trade_id = %stored.trade_id,
            stock_id = %stored.stock_id,
            "trade recorded"
        );

        Ok(stored)
    }

    /// Validate a candidate, then append it
    pub fn submit(&self, candidate: &Value) -> Result<Trade, MarketError> {
        let trade = self.validate(candidate)?;
        self.append(trade)
    }

    /// Snapshot of every stored trade in insertion order
    pub fn all(&self) -> Vec<Trade> {
        self.trades.read().clone()
    }

    pub fn len(&self) -> usize {
        self.trades.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Number};
    use std::sync::Arc;

    #[test]
    fn test_seeded_ledger() {
        let ledger = Ledger::seeded();
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.all()[0], Trade::new(1, 1, 10, "buy", "2024-08-07"));
    }

    #[test]
    fn test_append_increments_id_and_grows_by_one() {
        let ledger = Ledger::seeded();
        let stored = ledger
            .append(Trade::new(4, 4, 10, "buy", "2024-08-10"))
            .unwrap();

        assert_eq!(stored, Trade::new(5, 4, 10, "buy", "2024-08-10"));
        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.all().last(), Some(&stored));
    }

    #[test]
    fn test_append_allows_duplicate_ids() {
        let ledger = Ledger::default();
        ledger.append(Trade::new(1, 1, 1, "buy", "2024-08-10")).unwrap();
        ledger.append(Trade::new(1, 1, 1, "buy", "2024-08-10")).unwrap();

        let ids: Vec<Number> = ledger.all().into_iter().map(|t| t.trade_id).collect();
        assert_eq!(ids, vec![Number::from(2), Number::from(2)]);
    }

    #[test]
    fn test_append_past_i64_max() {
        let ledger = Ledger::default();
        let stored = ledger
            .append(Trade::new(i64::MAX, 1, 1, "buy", "2024-08-10"))
            .unwrap();

        assert_eq!(stored.trade_id.as_u64(), Some(i64::MAX as u64 + 1));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_submit_fractional_id() {
        let ledger = Ledger::default();
        let stored = ledger.submit(&json!({ "tradeId": 4.5, "stockId": 1 })).unwrap();

        assert_eq!(stored.trade_id.as_f64(), Some(5.5));
        assert_eq!(ledger.all()[0].trade_id.as_f64(), Some(5.5));
    }

    #[test]
    fn test_submit_rejects_before_mutation() {
        let ledger = Ledger::seeded();

        assert_eq!(
            ledger.submit(&json!({ "stockId": 4 })),
            Err(MarketError::MissingTradeId)
        );
        assert_eq!(
            ledger.submit(&json!({ "tradeId": 4 })),
            Err(MarketError::MissingStockId)
        );
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_submit_valid_candidate() {
        let ledger = Ledger::default();
        let stored = ledger
            .submit(&json!({ "tradeId": 10, "stockId": 2, "tradeType": "sell" }))
            .unwrap();

        assert_eq!(stored.trade_id, Number::from(11));
        assert_eq!(stored.trade_type, Some(json!("sell")));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        let ledger = Arc::new(Ledger::default());

        let handles: Vec<_> = (1..=8)
            .map(|i| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || {
                    for j in 0..100 {
                        ledger
                            .append(Trade::new(i * 1000 + j, i, 1, "buy", "2024-08-10"))
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ledger.len(), 800);
    }
}
