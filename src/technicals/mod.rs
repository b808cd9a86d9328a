//! Technicals module - streaming RSI/SMA/EMA over daily bar series.

mod technicals_calculator;
mod technicals_service;


pub use technicals_calculator::{
    snapshot_from_bars, update_moving_averages, update_rsi, update_technicals,
};
pub use technicals_service::TechnicalsService;
