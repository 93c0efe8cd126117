use crate::models::Stock;

/// Read-only set of tradable stocks, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    stocks: Vec<Stock>,
}

impl Catalog {
    /// Create a catalog holding exactly the given stocks
    pub fn new(stocks: Vec<Stock>) -> Self {
        Self { stocks }
    }

    /// Create the catalog the service starts with
    pub fn seeded() -> Self {
        Self::new(Stock::seed())
    }

    /// All stocks in insertion order. May be empty.
    pub fn list_all(&self) -> &[Stock] {
        &self.stocks
    }

    /// Find the first stock whose ticker matches exactly (case-sensitive)
    pub fn find_by_ticker(&self, ticker: &str) -> Option<&Stock> {
        self.stocks.iter().find(|stock| stock.ticker == ticker)
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_list_all_preserves_order() {
        let catalog = Catalog::seeded();
        let tickers: Vec<&str> = catalog.list_all().iter().map(|s| s.ticker.as_str()).collect();

        assert_eq!(tickers, vec!["AAPL", "GOOGL", "TSLA"]);
        assert_eq!(catalog.list_all(), catalog.list_all());
    }

    #[test]
    fn test_find_by_ticker() {
        let catalog = Catalog::seeded();
        let apple = catalog.find_by_ticker("AAPL").unwrap();

        assert_eq!(apple.stock_id, 1);
        assert_eq!(apple.company_name, "Apple Inc.");
        assert_eq!(apple.price, dec!(150.75));
    }

    #[test]
    fn test_find_by_ticker_is_exact() {
        let catalog = Catalog::seeded();

        assert!(catalog.find_by_ticker("aapl").is_none());
        assert!(catalog.find_by_ticker("AAP").is_none());
        assert!(catalog.find_by_ticker(" AAPL").is_none());
        assert!(catalog.find_by_ticker("ZZZZ").is_none());
    }

    #[test]
    fn test_find_by_ticker_returns_first_match() {
        let catalog = Catalog::new(vec![
            Stock::new(1, "DUP", "First", dec!(1)),
            Stock::new(2, "DUP", "Second", dec!(2)),
        ]);

        assert_eq!(catalog.find_by_ticker("DUP").unwrap().stock_id, 1);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();

        assert!(catalog.is_empty());
        assert!(catalog.list_all().is_empty());
        assert!(catalog.find_by_ticker("AAPL").is_none());
    }
}
