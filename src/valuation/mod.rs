//! Valuation module - price enrichment of lots.

mod valuation_calculator;

#[cfg(test)]
mod valuation_calculator_tests;

pub use valuation_calculator::{annotate_lots, resolve_price_symbol};
