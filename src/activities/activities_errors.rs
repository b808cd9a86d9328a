use rust_decimal::Decimal;
use thiserror::Error;

/// Errors attributable to a single activity record. A rejected activity
/// never aborts the batch; the remaining records still process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity {activity_id} is missing required field '{field}'")]
    MissingField { activity_id: String, field: String },

    #[error("Activity {activity_id} has non-positive quantity {quantity}")]
    InvalidQuantity {
        activity_id: String,
        quantity: Decimal,
    },

    #[error("Activity {activity_id} has negative price {price}")]
    InvalidPrice { activity_id: String, price: Decimal },

    #[error("Activity {activity_id} has negative fee {fee}")]
    InvalidFee { activity_id: String, fee: Decimal },

    #[error("Send activity {0} has no destination account")]
    MissingDestinationAccount(String),

    #[error("Activity {activity_id} belongs to ledger {actual}, expected {expected}")]
    LedgerMismatch {
        activity_id: String,
        expected: String,
        actual: String,
    },
}
