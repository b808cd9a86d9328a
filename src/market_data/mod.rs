//! Market data module - quote and history models, source traits.

mod market_data_model;
mod market_data_traits;

pub use market_data_model::{HistoryBar, Quote, TechnicalsSnapshot};
pub use market_data_traits::{HistorySourceTrait, PriceSourceTrait};
