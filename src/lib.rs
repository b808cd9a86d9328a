//! Lot Book Core - tax-lot matching and technical-indicator engines.
//!
//! This crate contains the pure domain logic for a personal investment
//! ledger: turning an activity stream into tax lots, folding lots into
//! holdings and realized gain/loss, enriching lots with live quotes, and
//! computing rolling RSI/SMA/EMA over daily price history. It is
//! store-agnostic and defines traits implemented by the surrounding
//! application for persistence and market data.

pub mod activities;
pub mod constants;
pub mod errors;
pub mod holdings;
pub mod lots;
pub mod market_data;
pub mod technicals;
pub mod utils;
pub mod valuation;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
