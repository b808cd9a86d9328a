//! Tax-lot domain models.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::activities::{Activity, TRANSACTION_TYPE_REWARDS};
use crate::constants::HIFO_CUTOVER_YEAR;

/// Lifecycle of a lot. Lots are never deleted, only closed once their full
/// quantity has been sold or sent away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LotStatus {
    #[default]
    Open,
    Closed,
}

/// Order in which open lots are consumed by a disposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisposalPolicy {
    /// Oldest acquisition date first.
    Fifo,
    /// Highest unit cost first.
    Hifo,
}

impl DisposalPolicy {
    /// Disposals dated through `HIFO_CUTOVER_YEAR` use FIFO; later years
    /// use HIFO. Fixed historical cut-over.
    pub fn for_date(date: NaiveDate) -> Self {
        if date.year() > HIFO_CUTOVER_YEAR {
            DisposalPolicy::Hifo
        } else {
            DisposalPolicy::Fifo
        }
    }
}

/// A slice of ownership of one symbol acquired at one point in time.
///
/// Invariants maintained by the lot calculator:
/// `0 <= remaining_quantity <= original_quantity`, and
/// `remaining_quantity == 0` exactly when `status == Closed`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub id: String,
    pub source_activity_id: String,
    pub ledger_id: String,
    pub group: String,
    pub category: String,
    pub account: String,
    pub symbol: String,
    pub acquisition_date: NaiveDate,
    /// How the quantity was acquired (`Buy` or `Rewards`).
    pub transaction_type: String,
    /// Date of the last activity that touched this lot.
    pub transaction_date: NaiveDate,
    pub status: LotStatus,
    pub original_quantity: Decimal,
    pub remaining_quantity: Decimal,
    pub unit_cost: Decimal,
    pub fee: Decimal,

    // Sale bookkeeping, set when the lot (or a split of it) is sold.
    pub sale_date: Option<NaiveDate>,
    pub sale_quantity: Decimal,
    pub sale_price: Decimal,

    // Send bookkeeping, accumulated on the source lot of a transfer.
    pub send_date: Option<NaiveDate>,
    pub sent_quantity: Decimal,
    /// Colon-separated account history for transferred lots.
    pub origin_account_chain: String,

    // Valuation fields, populated by price enrichment.
    pub last_price: Decimal,
    pub price_diff_amount: Decimal,
    pub price_diff_percent: Decimal,
    pub cost_value: Decimal,
    pub market_value: Decimal,
    pub day_gain_amount: Decimal,
    pub gain_amount: Decimal,
    pub gain_percent: Decimal,
    /// Set when price enrichment could not resolve a quote for the symbol.
    #[serde(default)]
    pub unpriced: bool,
}

impl Lot {
    /// Seeds a new open lot from an acquisition activity. The activity id
    /// doubles as the lot id so a replayed batch lands on the same record
    /// instead of duplicating it.
    pub fn from_acquisition(ledger_id: &str, activity: &Activity) -> Self {
        Lot {
            id: activity.id.clone(),
            source_activity_id: activity.id.clone(),
            ledger_id: ledger_id.to_string(),
            group: activity.group.clone(),
            category: activity.category.clone(),
            account: activity.account.clone(),
            symbol: activity.symbol.clone(),
            acquisition_date: activity.date,
            transaction_type: activity.transaction_type.clone(),
            transaction_date: activity.date,
            status: LotStatus::Open,
            original_quantity: activity.quantity,
            remaining_quantity: activity.quantity,
            unit_cost: activity.price,
            fee: activity.fee,
            ..Lot::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == LotStatus::Open
    }

    pub fn is_closed(&self) -> bool {
        self.status == LotStatus::Closed
    }

    /// Whether the lot was acquired through a reward rather than a buy.
    pub fn is_reward(&self) -> bool {
        self.transaction_type == TRANSACTION_TYPE_REWARDS
    }
}
