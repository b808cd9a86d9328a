//! Market data domain models.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time quote for one symbol, as returned by a price source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub last_price: Decimal,
    pub price_diff_amount: Decimal,
    pub price_diff_percent: Decimal,
}

/// One daily OHLC bar for one symbol, annotated with per-period indicator
/// values once the technicals calculator has run over the series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryBar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub adj_close: Decimal,
    pub div_cash: Decimal,
    pub volume: Decimal,
    #[serde(default)]
    pub sma: BTreeMap<u32, Decimal>,
    #[serde(default)]
    pub ema: BTreeMap<u32, Decimal>,
    #[serde(default)]
    pub rsi: BTreeMap<u32, Decimal>,
}

impl HistoryBar {
    /// Bar with every price set to `close` and empty indicator maps.
    pub fn from_close(symbol: &str, date: NaiveDate, close: Decimal) -> Self {
        HistoryBar {
            symbol: symbol.to_string(),
            date,
            open: close,
            high: close,
            low: close,
            close,
            adj_close: close,
            div_cash: Decimal::ZERO,
            volume: Decimal::ZERO,
            sma: BTreeMap::new(),
            ema: BTreeMap::new(),
            rsi: BTreeMap::new(),
        }
    }
}

/// Latest per-period indicator values for one symbol, copied from the most
/// recent bar of a recomputed series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalsSnapshot {
    pub symbol: String,
    pub date: Option<NaiveDate>,
    pub sma: BTreeMap<u32, Decimal>,
    pub ema: BTreeMap<u32, Decimal>,
    pub rsi: BTreeMap<u32, Decimal>,
}
