//! Tests for the holdings service against in-memory backends.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::activities::TRANSACTION_TYPE_BUY;
    use crate::errors::Error;
    use crate::holdings::HoldingsService;
    use crate::lots::{Lot, LotFilter, LotStatus, LotStoreTrait};
    use crate::market_data::{PriceSourceTrait, Quote};
    use crate::Result;

    const LEDGER: &str = "ledger-1";

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn lot(id: &str, symbol: &str, quantity: Decimal, cost: Decimal) -> Lot {
        Lot {
            id: id.to_string(),
            source_activity_id: id.to_string(),
            ledger_id: LEDGER.to_string(),
            group: "Crypto".to_string(),
            category: "Personal".to_string(),
            account: "Coinbase".to_string(),
            symbol: symbol.to_string(),
            acquisition_date: d(2021, 1, 1),
            transaction_type: TRANSACTION_TYPE_BUY.to_string(),
            transaction_date: d(2021, 1, 1),
            status: LotStatus::Open,
            original_quantity: quantity,
            remaining_quantity: quantity,
            unit_cost: cost,
            ..Lot::default()
        }
    }

    #[derive(Default)]
    struct FixedLotStore {
        lots: Vec<Lot>,
    }

    #[async_trait]
    impl LotStoreTrait for FixedLotStore {
        fn find_open_lots(&self, filter: &LotFilter) -> Result<Vec<Lot>> {
            Ok(self
                .lots
                .iter()
                .filter(|lot| lot.is_open() && filter.matches(lot))
                .cloned()
                .collect())
        }

        fn find_closed_lots_in_range(
            &self,
            filter: &LotFilter,
            from: Option<NaiveDate>,
            to: Option<NaiveDate>,
        ) -> Result<Vec<Lot>> {
            Ok(self
                .lots
                .iter()
                .filter(|lot| lot.is_closed() && filter.matches(lot))
                .filter(|lot| match lot.sale_date {
                    Some(date) => {
                        from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
                    }
                    None => false,
                })
                .cloned()
                .collect())
        }

        async fn upsert_lots(&self, _lots: &[Lot]) -> Result<usize> {
            Ok(0)
        }

        async fn delete_lots(
            &self,
            _filter: &LotFilter,
            _from: Option<NaiveDate>,
            _to: Option<NaiveDate>,
        ) -> Result<usize> {
            Ok(0)
        }
    }

    /// Serves quotes from a fixed table and records which symbols were
    /// requested.
    #[derive(Default)]
    struct TablePriceSource {
        quotes: HashMap<String, Quote>,
        requested: Mutex<Vec<String>>,
    }

    impl TablePriceSource {
        fn with_quote(mut self, symbol: &str, last: Decimal) -> Self {
            self.quotes.insert(
                symbol.to_string(),
                Quote {
                    symbol: symbol.to_string(),
                    last_price: last,
                    price_diff_amount: dec!(1),
                    price_diff_percent: dec!(1),
                },
            );
            self
        }
    }

    #[async_trait]
    impl PriceSourceTrait for TablePriceSource {
        async fn current_price(&self, symbol: &str) -> Result<Quote> {
            self.quotes
                .get(symbol)
                .cloned()
                .ok_or_else(|| Error::MarketData(format!("no quote for {}", symbol)))
        }

        async fn current_prices(&self, symbols: &[String]) -> Result<HashMap<String, Quote>> {
            self.requested.lock().unwrap().extend(symbols.iter().cloned());
            Ok(symbols
                .iter()
                .filter_map(|symbol| self.quotes.get(symbol).map(|q| (symbol.clone(), q.clone())))
                .collect())
        }
    }

    fn service(store: FixedLotStore, prices: TablePriceSource) -> (HoldingsService, Arc<TablePriceSource>) {
        let prices = Arc::new(prices);
        (
            HoldingsService::new(Arc::new(store), prices.clone()),
            prices,
        )
    }

    #[tokio::test]
    async fn test_get_holdings_prices_and_aggregates() {
        let store = FixedLotStore {
            lots: vec![
                lot("l1", "BTC-USD", dec!(2), dec!(50)),
                lot("l2", "BTC-USD", dec!(1), dec!(80)),
            ],
        };
        let (service, _) = service(store, TablePriceSource::default().with_quote("BTC-USD", dec!(100)));

        let holdings = service
            .get_holdings(&LotFilter::for_ledger(LEDGER), false)
            .await
            .unwrap();

        assert_eq!(holdings.len(), 1);
        let holding = &holdings[0];
        assert_eq!(holding.quantity, dec!(3));
        assert_eq!(holding.cost_value, dec!(180));
        assert_eq!(holding.market_value, dec!(300));
        assert_eq!(holding.last_price, dec!(100));
    }

    #[tokio::test]
    async fn test_get_holdings_requests_aliased_symbols_once() {
        let store = FixedLotStore {
            lots: vec![
                lot("l1", "ETH2-USD", dec!(1), dec!(10)),
                lot("l2", "ETH-USD", dec!(1), dec!(10)),
            ],
        };
        let (service, prices) = service(store, TablePriceSource::default().with_quote("ETH-USD", dec!(20)));

        let holdings = service
            .get_holdings(&LotFilter::for_ledger(LEDGER), false)
            .await
            .unwrap();

        // Both staking alias and underlying resolve to one quote request.
        assert_eq!(*prices.requested.lock().unwrap(), vec!["ETH-USD".to_string()]);
        assert_eq!(holdings.len(), 2);
        assert!(holdings.iter().all(|h| h.last_price == dec!(20)));
    }

    #[tokio::test]
    async fn test_get_holdings_empty_store_skips_price_source() {
        let (service, prices) = service(FixedLotStore::default(), TablePriceSource::default());

        let holdings = service
            .get_holdings(&LotFilter::for_ledger(LEDGER), false)
            .await
            .unwrap();

        assert!(holdings.is_empty());
        assert!(prices.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_gain_loss_respects_range() {
        let mut sold = lot("l1:s1", "BTC-USD", dec!(4), dec!(5));
        sold.status = LotStatus::Closed;
        sold.remaining_quantity = dec!(0);
        sold.sale_date = Some(d(2021, 6, 1));
        sold.sale_quantity = dec!(4);
        sold.sale_price = dec!(8);

        let store = FixedLotStore { lots: vec![sold] };
        let (service, _) = service(store, TablePriceSource::default());
        let filter = LotFilter::for_ledger(LEDGER);

        let realized = service
            .get_gain_loss(&filter, Some(d(2021, 1, 1)), Some(d(2021, 12, 31)))
            .await
            .unwrap();
        assert_eq!(realized.len(), 1);
        assert_eq!(realized[0].gain_amount, dec!(12));

        let outside = service
            .get_gain_loss(&filter, Some(d(2022, 1, 1)), None)
            .await
            .unwrap();
        assert!(outside.is_empty());
    }
}
