//! Holdings and realized gain/loss orchestration.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;

use crate::holdings::holdings_calculator::{
    compute_gain_loss, compute_holdings, compute_rewards_valuation,
};
use crate::holdings::holdings_model::Holding;
use crate::lots::{Lot, LotFilter, LotStoreTrait};
use crate::market_data::{PriceSourceTrait, Quote};
use crate::valuation::{annotate_lots, resolve_price_symbol};
use crate::Result;

pub struct HoldingsService {
    lot_store: Arc<dyn LotStoreTrait>,
    price_source: Arc<dyn PriceSourceTrait>,
}

impl HoldingsService {
    pub fn new(lot_store: Arc<dyn LotStoreTrait>, price_source: Arc<dyn PriceSourceTrait>) -> Self {
        Self {
            lot_store,
            price_source,
        }
    }

    /// Current positions for one ledger scope: open lots priced against
    /// live quotes and folded into one row per symbol group.
    pub async fn get_holdings(&self, filter: &LotFilter, by_account: bool) -> Result<Vec<Holding>> {
        let mut lots = self.lot_store.find_open_lots(filter)?;
        self.price_lots(&mut lots).await?;
        Ok(compute_holdings(&lots, by_account))
    }

    /// Realized gain/loss rows for sales dated inside the inclusive range.
    pub async fn get_gain_loss(
        &self,
        filter: &LotFilter,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Lot>> {
        let lots = self.lot_store.find_closed_lots_in_range(filter, from, to)?;
        Ok(compute_gain_loss(&lots, from, to))
    }

    /// Cost valuation of every reward-sourced lot in scope, open or closed.
    pub async fn get_rewards_valuation(&self, filter: &LotFilter) -> Result<Vec<Lot>> {
        let mut lots = self.lot_store.find_open_lots(filter)?;
        lots.extend(self.lot_store.find_closed_lots_in_range(filter, None, None)?);
        Ok(compute_rewards_valuation(&lots))
    }

    async fn price_lots(&self, lots: &mut [Lot]) -> Result<()> {
        let symbols: Vec<String> = lots
            .iter()
            .map(|lot| resolve_price_symbol(&lot.symbol).to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if symbols.is_empty() {
            return Ok(());
        }

        let quotes: HashMap<String, Quote> = self.price_source.current_prices(&symbols).await?;
        let unresolved = annotate_lots(lots, &quotes);
        if !unresolved.is_empty() {
            debug!("No quotes for symbols: {}", unresolved.join(", "));
        }
        Ok(())
    }
}
