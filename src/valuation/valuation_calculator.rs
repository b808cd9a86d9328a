//! Price enrichment of lots.
//!
//! Attaches current quotes and derived gain figures to lots. An unresolved
//! symbol is a data anomaly, not a failure: the lot keeps its prior
//! valuation fields and is flagged for diagnostics.

use std::collections::HashMap;

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::SYMBOL_ALIASES;
use crate::lots::Lot;
use crate::market_data::Quote;

/// Resolves the quote symbol for a lot, mapping synthetic symbols to the
/// underlying asset they price off.
pub fn resolve_price_symbol(symbol: &str) -> &str {
    SYMBOL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == symbol)
        .map(|(_, target)| *target)
        .unwrap_or(symbol)
}

/// Attaches current prices and gain figures to each lot in place and
/// returns the distinct symbols no quote could be resolved for.
///
/// Open lots are marked to market over their remaining quantity; closed
/// lots with a recorded sale are valued over the sold quantity at the sale
/// price.
pub fn annotate_lots(lots: &mut [Lot], quotes: &HashMap<String, Quote>) -> Vec<String> {
    let mut unresolved: Vec<String> = Vec::new();

    for lot in lots.iter_mut() {
        match quotes.get(resolve_price_symbol(&lot.symbol)) {
            Some(quote) => {
                lot.last_price = quote.last_price;
                lot.price_diff_amount = quote.price_diff_amount;
                lot.price_diff_percent = quote.price_diff_percent;
                lot.unpriced = false;
            }
            None => {
                warn!("No quote found for symbol {}", lot.symbol);
                lot.unpriced = true;
                if !unresolved.contains(&lot.symbol) {
                    unresolved.push(lot.symbol.clone());
                }
            }
        }

        if lot.is_open() {
            lot.cost_value = lot.remaining_quantity * lot.unit_cost;
            lot.market_value = lot.remaining_quantity * lot.last_price;
            lot.day_gain_amount = lot.remaining_quantity * lot.price_diff_amount;
        } else if lot.sale_quantity > Decimal::ZERO {
            lot.cost_value = lot.sale_quantity * lot.unit_cost;
            lot.market_value = lot.sale_quantity * lot.sale_price;
        }

        lot.gain_amount = lot.market_value - lot.cost_value;
        lot.gain_percent = if lot.cost_value.is_zero() {
            Decimal::ZERO
        } else {
            lot.gain_amount * dec!(100) / lot.cost_value
        };
    }

    unresolved
}
