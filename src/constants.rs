/// RSI lookback periods computed for every history bar.
pub const RSI_PERIODS: [u32; 5] = [5, 10, 14, 20, 26];

/// SMA lookback periods computed for every history bar.
pub const SMA_PERIODS: [u32; 5] = [5, 20, 50, 100, 200];

/// EMA lookback periods computed for every history bar.
pub const EMA_PERIODS: [u32; 6] = [5, 12, 26, 50, 100, 200];

/// Disposals dated in years up to and including this one consume lots
/// oldest-first (FIFO); later years consume highest-cost-first (HIFO).
/// Historical cut-over, not a runtime option.
pub const HIFO_CUTOVER_YEAR: i32 = 2020;

/// Synthetic symbols that price off another asset's quote. Applied before
/// any quote lookup.
pub const SYMBOL_ALIASES: [(&str, &str); 2] = [("ETH2-USD", "ETH-USD"), ("WETH-USD", "ETH-USD")];

/// Decimal places used for price-like values below 1.0.
pub const SUB_UNIT_PRICE_PRECISION: u32 = 4;

/// Decimal places used for price-like values at or above 1.0.
pub const PRICE_PRECISION: u32 = 2;
