//! Market Store Module
//!
//! In-memory state of the service:
//! - `catalog` - Read-only list of tradable stocks
//! - `ledger` - Append-only sequence of recorded trades
//! - `validation` - Trade payload checks
//! - `errors` - Error types for store operations

pub mod catalog;
pub mod errors;
pub mod ledger;
pub mod validation;

pub use catalog::Catalog;
pub use errors::MarketError;
pub use ledger::Ledger;
pub use validation::validate_trade;

/// Owns the catalog and the ledger for the lifetime of the process.
///
/// Handlers share one instance behind an `Arc`; tests build their own.
#[derive(Debug, Default)]
pub struct MarketStore {
    catalog: Catalog,
    ledger: Ledger,
}

impl MarketStore {
    pub fn new(catalog: Catalog, ledger: Ledger) -> Self {
        Self { catalog, ledger }
    }

    /// Store holding the startup stocks and trades
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded(), Ledger::seeded())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = MarketStore::seeded();
        assert_eq!(store.catalog().len(), 3);
        assert_eq!(store.ledger().len(), 3);
    }

    #[test]
    fn test_default_store_is_empty() {
        let store = MarketStore::default();
        assert!(store.catalog().is_empty());
        assert!(store.ledger().is_empty());
    }
}
