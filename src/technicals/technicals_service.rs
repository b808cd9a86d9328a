//! Technicals service - fetches daily history and recomputes indicators.

use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::market_data::{HistoryBar, HistorySourceTrait, Quote, TechnicalsSnapshot};
use crate::technicals::technicals_calculator::{snapshot_from_bars, update_technicals};
use crate::utils::math_utils::price_diff;
use crate::{Error, Result};

pub struct TechnicalsService {
    history_source: Arc<dyn HistorySourceTrait>,
}

impl TechnicalsService {
    pub fn new(history_source: Arc<dyn HistorySourceTrait>) -> Self {
        Self { history_source }
    }

    /// Fetches the symbol's daily history and recomputes every indicator
    /// over the full series. The returned bars replace whatever indicator
    /// values were stored before.
    pub async fn recompute_history(
        &self,
        symbol: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<HistoryBar>> {
        let mut bars = self.history_source.history(symbol, from, to).await?;
        debug!("Recomputing technicals for {} over {} bars", symbol, bars.len());
        update_technicals(&mut bars);
        Ok(bars)
    }

    /// Latest per-period indicator values for the symbol, taken from the
    /// last bar of a freshly recomputed series.
    pub async fn latest_snapshot(&self, symbol: &str) -> Result<TechnicalsSnapshot> {
        let bars = self.recompute_history(symbol, None, None).await?;
        Ok(snapshot_from_bars(symbol, &bars))
    }

    /// End-of-day quote derived from the last two closes of the symbol's
    /// history, for symbols no live price source covers.
    pub async fn eod_quote(&self, symbol: &str) -> Result<Quote> {
        let bars = self.history_source.history(symbol, None, None).await?;
        let last = bars
            .last()
            .ok_or_else(|| Error::MarketData(format!("no history for {}", symbol)))?;
        let prev_close = if bars.len() > 1 {
            bars[bars.len() - 2].close
        } else {
            last.close
        };

        let (amount, percent) = price_diff(last.close, prev_close);
        Ok(Quote {
            symbol: symbol.to_string(),
            last_price: last.close,
            price_diff_amount: amount,
            price_diff_percent: percent,
        })
    }
}
