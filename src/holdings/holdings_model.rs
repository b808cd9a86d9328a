//! Holdings domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lots::Lot;

/// Derived, non-persistent aggregate of the open lots for one symbol
/// within a (group, category[, account]) scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub group: String,
    pub category: String,
    /// Empty unless aggregation is by account.
    pub account: String,
    pub symbol: String,
    pub quantity: Decimal,
    /// Weighted-average cost per unit (`cost_value / quantity`).
    pub unit_cost: Decimal,
    pub cost_value: Decimal,
    pub market_value: Decimal,
    pub last_price: Decimal,
    pub price_diff_amount: Decimal,
    pub price_diff_percent: Decimal,
    pub day_gain_amount: Decimal,
    pub gain_amount: Decimal,
    pub gain_percent: Decimal,
}

impl Holding {
    /// Seeds an empty holding with the identity fields of its first lot.
    pub(crate) fn seed_from(lot: &Lot, by_account: bool) -> Self {
        Holding {
            group: lot.group.clone(),
            category: lot.category.clone(),
            account: if by_account {
                lot.account.clone()
            } else {
                String::new()
            },
            symbol: lot.symbol.clone(),
            ..Holding::default()
        }
    }
}
