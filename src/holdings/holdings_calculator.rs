//! Pure folds from lot collections to reporting views.
//!
//! All three calculators expect lots already enriched by
//! `valuation::annotate_lots`; they combine the valuation fields, they do
//! not derive them.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::holdings::holdings_model::Holding;
use crate::lots::Lot;

/// Folds open lots into position summaries grouped by
/// (group, category, symbol), or by (group, category, account, symbol)
/// when `by_account` is set. Groups come back in first-seen lot order.
pub fn compute_holdings(lots: &[Lot], by_account: bool) -> Vec<Holding> {
    let mut order: Vec<String> = Vec::new();
    let mut grouped: HashMap<String, Holding> = HashMap::new();

    for lot in lots.iter().filter(|lot| lot.is_open()) {
        let key = if by_account {
            format!("{}|{}|{}|{}", lot.group, lot.category, lot.account, lot.symbol)
        } else {
            format!("{}|{}|{}", lot.group, lot.category, lot.symbol)
        };

        let holding = match grouped.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(Holding::seed_from(lot, by_account))
            }
        };

        holding.last_price = lot.last_price;
        holding.price_diff_amount = lot.price_diff_amount;
        holding.price_diff_percent = lot.price_diff_percent;

        holding.quantity += lot.remaining_quantity;
        holding.cost_value += lot.cost_value;
        holding.market_value += lot.market_value;
        holding.day_gain_amount += lot.day_gain_amount;
        holding.gain_amount += lot.gain_amount;

        if holding.quantity.is_zero() {
            warn!(
                "Holding {} {} has zero quantity; average cost zeroed",
                holding.account, holding.symbol
            );
            holding.unit_cost = Decimal::ZERO;
        } else {
            holding.unit_cost = holding.cost_value / holding.quantity;
        }
        holding.gain_percent = if holding.cost_value.is_zero() {
            Decimal::ZERO
        } else {
            holding.gain_amount * dec!(100) / holding.cost_value
        };
    }

    order
        .into_iter()
        .filter_map(|key| grouped.remove(&key))
        .collect()
}

/// Realized gain/loss: closed lots with a recorded sale whose sale date
/// falls inside the inclusive range (open bounds when `None`). Each
/// returned lot carries cost/market value and gain over the sold slice.
pub fn compute_gain_loss(lots: &[Lot], from: Option<NaiveDate>, to: Option<NaiveDate>) -> Vec<Lot> {
    lots.iter()
        .filter(|lot| lot.is_closed() && lot.sale_quantity > Decimal::ZERO)
        .filter(|lot| match lot.sale_date {
            Some(date) => from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t),
            None => false,
        })
        .map(|lot| {
            let mut realized = lot.clone();
            realized.cost_value = realized.sale_quantity * realized.unit_cost;
            realized.market_value = realized.sale_quantity * realized.sale_price;
            realized.gain_amount = realized.market_value - realized.cost_value;
            realized.gain_percent = if realized.cost_value.is_zero() {
                Decimal::ZERO
            } else {
                realized.gain_amount * dec!(100) / realized.cost_value
            };
            realized
        })
        .collect()
}

/// Cost valuation of reward-sourced lots: remaining quantity while the lot
/// is open, the full original quantity once it has closed.
pub fn compute_rewards_valuation(lots: &[Lot]) -> Vec<Lot> {
    lots.iter()
        .filter(|lot| lot.is_reward())
        .map(|lot| {
            let mut valued = lot.clone();
            valued.cost_value = if valued.is_open() {
                valued.remaining_quantity * valued.unit_cost
            } else {
                valued.original_quantity * valued.unit_cost
            };
            valued
        })
        .collect()
}
