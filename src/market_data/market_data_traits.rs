use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::market_data_model::{HistoryBar, Quote};
use crate::Result;

/// Trait defining the contract for point-quote lookups.
#[async_trait]
pub trait PriceSourceTrait: Send + Sync {
    /// Returns the current quote for one symbol, including day-change fields.
    async fn current_price(&self, symbol: &str) -> Result<Quote>;

    /// Returns current quotes for many symbols, keyed by symbol. Symbols
    /// the source cannot resolve are simply absent from the map.
    async fn current_prices(&self, symbols: &[String]) -> Result<HashMap<String, Quote>>;
}

/// Trait defining the contract for daily OHLC history.
///
/// Implementations must return bars deduplicated by date and sorted
/// ascending; the technicals calculator relies on both.
#[async_trait]
pub trait HistorySourceTrait: Send + Sync {
    async fn history(
        &self,
        symbol: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<HistoryBar>>;
}
