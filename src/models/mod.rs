pub mod stock;
pub mod trade;

pub use stock::Stock;
pub use trade::Trade;
