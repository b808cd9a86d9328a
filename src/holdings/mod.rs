//! Holdings module - position aggregation and realized gain/loss.

mod holdings_calculator;
mod holdings_model;
mod holdings_service;

#[cfg(test)]
mod holdings_service_tests;

pub use holdings_calculator::{compute_gain_loss, compute_holdings, compute_rewards_valuation};
pub use holdings_model::Holding;
pub use holdings_service::HoldingsService;
