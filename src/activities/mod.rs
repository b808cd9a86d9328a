//! Activities module - ledger entry models, constants and errors.

mod activities_constants;
mod activities_errors;
mod activities_model;


pub use activities_constants::*;
pub use activities_errors::ActivityError;
pub use activities_model::Activity;
