//! Streaming RSI/SMA/EMA calculator.
//!
//! Each indicator keeps independent running state per configured period
//! and walks the series once. A recompute clears and rewrites every bar's
//! indicator maps, so processing the same input twice yields identical
//! output.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{EMA_PERIODS, RSI_PERIODS, SMA_PERIODS};
use crate::market_data::{HistoryBar, TechnicalsSnapshot};
use crate::utils::math_utils::{round_price, round_up};

struct RsiState {
    period: u32,
    sum_gain: Decimal,
    sum_loss: Decimal,
    avg_gain: Decimal,
    avg_loss: Decimal,
}

struct SmaState {
    period: u32,
    window_sum: Decimal,
}

struct EmaState {
    period: u32,
    multiplier: Decimal,
    seed_sum: Decimal,
}

/// Recomputes every configured indicator over the whole series in place.
/// Bars must be deduplicated by date and sorted ascending.
pub fn update_technicals(bars: &mut [HistoryBar]) {
    update_rsi(bars);
    update_moving_averages(bars);
}

/// Wilder's RSI for every configured period.
///
/// Gains and losses accumulate for indices below the period; the averages
/// seed at index == period and are smoothed recursively after that. By
/// convention `rsi = 100` when the average loss is zero.
pub fn update_rsi(bars: &mut [HistoryBar]) {
    let mut states: Vec<RsiState> = RSI_PERIODS
        .iter()
        .map(|&period| RsiState {
            period,
            sum_gain: Decimal::ZERO,
            sum_loss: Decimal::ZERO,
            avg_gain: Decimal::ZERO,
            avg_loss: Decimal::ZERO,
        })
        .collect();

    for x in 0..bars.len() {
        bars[x].rsi.clear();
        // No RSI on the first bar: there is no prior close to diff against.
        if x == 0 {
            continue;
        }

        let diff = bars[x].close - bars[x - 1].close;
        let (gain, loss) = if diff > Decimal::ZERO {
            (diff, Decimal::ZERO)
        } else {
            (Decimal::ZERO, -diff)
        };

        for state in states.iter_mut() {
            let period = Decimal::from(state.period);

            if x < state.period as usize {
                state.sum_gain += gain;
                state.sum_loss += loss;
                continue;
            }

            if x == state.period as usize {
                state.avg_gain = state.sum_gain / period;
                state.avg_loss = state.sum_loss / period;
            } else {
                state.avg_gain = (state.avg_gain * (period - Decimal::ONE) + gain) / period;
                state.avg_loss = (state.avg_loss * (period - Decimal::ONE) + loss) / period;
            }

            let rsi = if state.avg_loss.is_zero() {
                dec!(100)
            } else {
                let rs = state.avg_gain / state.avg_loss;
                dec!(100) - dec!(100) / (Decimal::ONE + rs)
            };
            bars[x].rsi.insert(state.period, round_up(rsi));
        }
    }
}

/// SMA and EMA for every configured period.
///
/// SMA keeps a sliding sum of the last `period` closes and emits from
/// index `period - 1`. EMA seeds with the simple average of the first
/// `period` closes; the recurrence reads the previous bar's stored
/// (rounded) value, matching what a re-fetch of the series would see.
pub fn update_moving_averages(bars: &mut [HistoryBar]) {
    let mut smas: Vec<SmaState> = SMA_PERIODS
        .iter()
        .map(|&period| SmaState {
            period,
            window_sum: Decimal::ZERO,
        })
        .collect();

    let mut emas: Vec<EmaState> = EMA_PERIODS
        .iter()
        .map(|&period| EmaState {
            period,
            multiplier: dec!(2) / (Decimal::from(period) + Decimal::ONE),
            seed_sum: Decimal::ZERO,
        })
        .collect();

    for x in 0..bars.len() {
        bars[x].sma.clear();
        bars[x].ema.clear();
        let close = bars[x].close;

        for state in smas.iter_mut() {
            let period = state.period as usize;
            state.window_sum += close;
            if x + 1 >= period {
                let sma = state.window_sum / Decimal::from(state.period);
                state.window_sum -= bars[x + 1 - period].close;
                bars[x].sma.insert(state.period, round_price(sma));
            }
        }

        for state in emas.iter_mut() {
            let period = state.period as usize;
            if x + 1 < period {
                state.seed_sum += close;
            } else if x + 1 == period {
                state.seed_sum += close;
                let seed = state.seed_sum / Decimal::from(state.period);
                bars[x].ema.insert(state.period, round_price(seed));
            } else {
                let prev = bars[x - 1]
                    .ema
                    .get(&state.period)
                    .copied()
                    .unwrap_or_default();
                let ema = (close - prev) * state.multiplier + prev;
                bars[x].ema.insert(state.period, round_price(ema));
            }
        }
    }
}

/// Latest per-period indicator values, taken from the last bar of a
/// recomputed series.
pub fn snapshot_from_bars(symbol: &str, bars: &[HistoryBar]) -> TechnicalsSnapshot {
    let last = bars.last();
    TechnicalsSnapshot {
        symbol: symbol.to_string(),
        date: last.map(|bar| bar.date),
        sma: last.map(|bar| bar.sma.clone()).unwrap_or_default(),
        ema: last.map(|bar| bar.ema.clone()).unwrap_or_default(),
        rsi: last.map(|bar| bar.rsi.clone()).unwrap_or_default(),
    }
}
