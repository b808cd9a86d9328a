//! Lots module - tax-lot models, the matching calculator, store trait and
//! import service.

mod lots_calculator;
mod lots_model;
mod lots_service;
mod lots_traits;


pub use lots_calculator::{apply_activities, LotImportOutcome, RejectedActivity};
pub use lots_model::{DisposalPolicy, Lot, LotStatus};
pub use lots_service::LotService;
pub use lots_traits::{LotFilter, LotStoreTrait};
