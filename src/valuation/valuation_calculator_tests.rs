//! Tests for lot price enrichment.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::lots::{Lot, LotStatus};
    use crate::market_data::Quote;
    use crate::valuation::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn open_lot(symbol: &str) -> Lot {
        Lot {
            id: "l1".to_string(),
            source_activity_id: "a1".to_string(),
            ledger_id: "ledger-1".to_string(),
            group: "Crypto".to_string(),
            category: "Personal".to_string(),
            account: "Coinbase".to_string(),
            symbol: symbol.to_string(),
            acquisition_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            transaction_type: "Buy".to_string(),
            transaction_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            status: LotStatus::Open,
            original_quantity: dec!(2),
            remaining_quantity: dec!(2),
            unit_cost: dec!(1000),
            ..Lot::default()
        }
    }

    fn quote(symbol: &str, last: rust_decimal::Decimal) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            last_price: last,
            price_diff_amount: dec!(10),
            price_diff_percent: dec!(1),
        }
    }

    #[test]
    fn test_alias_table_resolution() {
        assert_eq!(resolve_price_symbol("ETH2-USD"), "ETH-USD");
        assert_eq!(resolve_price_symbol("WETH-USD"), "ETH-USD");
        assert_eq!(resolve_price_symbol("BTC-USD"), "BTC-USD");
    }

    #[test]
    fn test_open_lot_marked_to_market() {
        let mut lots = vec![open_lot("BTC-USD")];
        let quotes = HashMap::from([("BTC-USD".to_string(), quote("BTC-USD", dec!(1500)))]);

        let unresolved = annotate_lots(&mut lots, &quotes);
        assert!(unresolved.is_empty());

        let lot = &lots[0];
        assert!(!lot.unpriced);
        assert_eq!(lot.last_price, dec!(1500));
        assert_eq!(lot.cost_value, dec!(2000));
        assert_eq!(lot.market_value, dec!(3000));
        assert_eq!(lot.day_gain_amount, dec!(20));
        assert_eq!(lot.gain_amount, dec!(1000));
        assert_eq!(lot.gain_percent, dec!(50));
    }

    #[test]
    fn test_aliased_symbol_uses_underlying_quote() {
        let mut lots = vec![open_lot("ETH2-USD")];
        let quotes = HashMap::from([("ETH-USD".to_string(), quote("ETH-USD", dec!(2000)))]);

        annotate_lots(&mut lots, &quotes);
        assert_eq!(lots[0].last_price, dec!(2000));
        assert!(!lots[0].unpriced);
    }

    #[test]
    fn test_closed_sale_lot_valued_at_sale_price() {
        let mut lot = open_lot("BTC-USD");
        lot.status = LotStatus::Closed;
        lot.remaining_quantity = dec!(0);
        lot.sale_quantity = dec!(2);
        lot.sale_price = dec!(1200);

        let mut lots = vec![lot];
        annotate_lots(&mut lots, &HashMap::new());

        let lot = &lots[0];
        assert_eq!(lot.cost_value, dec!(2000));
        assert_eq!(lot.market_value, dec!(2400));
        assert_eq!(lot.gain_amount, dec!(400));
        assert_eq!(lot.gain_percent, dec!(20));
    }

    #[test]
    fn test_unresolved_symbol_flags_lot_and_keeps_prior_price() {
        let mut lot = open_lot("DOGE-USD");
        lot.last_price = dec!(0.25);

        let mut lots = vec![lot];
        let unresolved = annotate_lots(&mut lots, &HashMap::new());

        assert_eq!(unresolved, vec!["DOGE-USD".to_string()]);
        let lot = &lots[0];
        assert!(lot.unpriced);
        // Prior price survives and still drives the valuation.
        assert_eq!(lot.last_price, dec!(0.25));
        assert_eq!(lot.market_value, dec!(0.50));
    }

    #[test]
    fn test_zero_cost_value_guards_gain_percent() {
        let mut lot = open_lot("BTC-USD");
        lot.unit_cost = dec!(0);

        let mut lots = vec![lot];
        let quotes = HashMap::from([("BTC-USD".to_string(), quote("BTC-USD", dec!(100)))]);
        annotate_lots(&mut lots, &quotes);

        assert_eq!(lots[0].gain_percent, dec!(0));
        assert_eq!(lots[0].gain_amount, dec!(200));
    }
}
