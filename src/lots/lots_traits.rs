use async_trait::async_trait;
use chrono::NaiveDate;

use super::lots_model::Lot;
use crate::Result;

/// Scope selector for lot queries and deletions. `None` fields match
/// everything within the ledger.
#[derive(Debug, Clone, Default)]
pub struct LotFilter {
    pub ledger_id: String,
    pub group: Option<String>,
    pub category: Option<String>,
    pub account: Option<String>,
    pub symbol: Option<String>,
}

impl LotFilter {
    pub fn for_ledger(ledger_id: &str) -> Self {
        LotFilter {
            ledger_id: ledger_id.to_string(),
            ..LotFilter::default()
        }
    }

    /// Whether a lot falls inside this scope.
    pub fn matches(&self, lot: &Lot) -> bool {
        lot.ledger_id == self.ledger_id
            && self.group.as_deref().map_or(true, |g| g == lot.group)
            && self.category.as_deref().map_or(true, |c| c == lot.category)
            && self.account.as_deref().map_or(true, |a| a == lot.account)
            && self.symbol.as_deref().map_or(true, |s| s == lot.symbol)
    }
}

/// Trait defining the contract for lot persistence.
///
/// Implementations must return open lots ordered ascending by acquisition
/// date; the calculator re-sorts defensively either way.
#[async_trait]
pub trait LotStoreTrait: Send + Sync {
    fn find_open_lots(&self, filter: &LotFilter) -> Result<Vec<Lot>>;

    /// Closed lots whose sale date falls inside the inclusive range; open
    /// bounds when `None`.
    fn find_closed_lots_in_range(
        &self,
        filter: &LotFilter,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Lot>>;

    async fn upsert_lots(&self, lots: &[Lot]) -> Result<usize>;

    /// Removes lots derived from a previous import of the same scope and
    /// acquisition-date range so a re-import can rebuild them.
    async fn delete_lots(
        &self,
        filter: &LotFilter,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<usize>;
}
