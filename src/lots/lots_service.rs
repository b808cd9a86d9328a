//! Lot import orchestration.

use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::activities::Activity;
use crate::lots::lots_calculator::{apply_activities, LotImportOutcome};
use crate::lots::lots_traits::{LotFilter, LotStoreTrait};
use crate::Result;

pub struct LotService {
    lot_store: Arc<dyn LotStoreTrait>,
}

impl LotService {
    pub fn new(lot_store: Arc<dyn LotStoreTrait>) -> Self {
        Self { lot_store }
    }

    /// Re-imports one ledger's activity batch: lots derived from a
    /// previous import of the same scope and date range are dropped, the
    /// batch is matched against the remaining open lots, and the resulting
    /// mutations are persisted as one batch.
    ///
    /// Callers must serialize imports per ledger; the calculator assumes a
    /// single ordered, non-interleaved pass over the lot set.
    pub async fn import_activities(
        &self,
        filter: &LotFilter,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        activities: Vec<Activity>,
    ) -> Result<LotImportOutcome> {
        let removed = self.lot_store.delete_lots(filter, from, to).await?;
        debug!(
            "Dropped {} previously imported lots for ledger {}",
            removed, filter.ledger_id
        );

        let open_lots = self.lot_store.find_open_lots(filter)?;
        let outcome = apply_activities(&filter.ledger_id, activities, open_lots);

        let upserted = self.lot_store.upsert_lots(&outcome.lots).await?;
        debug!(
            "Import for ledger {} upserted {} lots ({} activities accepted, {} rejected, {} unmatched disposals)",
            filter.ledger_id,
            upserted,
            outcome.activities.len(),
            outcome.rejected.len(),
            outcome.unmatched_disposals.len()
        );
        Ok(outcome)
    }
}
