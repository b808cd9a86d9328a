//! Activity domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::activities::activities_constants::{
    ACQUISITION_TRANSACTION_TYPES, ACTIVITY_TYPE_INVESTMENT, ACTIVITY_TYPE_TRANSACTION,
    DISPOSAL_TRANSACTION_TYPES, TRANSACTION_TYPE_SEND,
};
use crate::activities::activities_errors::ActivityError;

/// Domain model representing one ledger entry.
///
/// Activities are read-only input to the lot engine: the import collects
/// them for bulk persistence but never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub ledger_id: String,
    pub date: NaiveDate,
    /// `Investment` or `Transaction`; see `activities_constants`.
    pub activity_type: String,
    /// `Buy`, `Sale`, `Send`, `Rewards`, or a provider-specific label the
    /// engine does not act on.
    pub transaction_type: String,
    pub group: String,
    pub category: String,
    pub account: String,
    /// Destination account, set for `Send` activities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account: Option<String>,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: Decimal,
    pub price: Decimal,
    /// Signed cash amount for plain transactions.
    pub amount: Decimal,
    pub fee: Decimal,
}

impl Activity {
    pub fn is_investment(&self) -> bool {
        self.activity_type == ACTIVITY_TYPE_INVESTMENT
    }

    pub fn is_transaction(&self) -> bool {
        self.activity_type == ACTIVITY_TYPE_TRANSACTION
    }

    /// Whether this activity creates a lot (Buy or Rewards).
    pub fn is_acquisition(&self) -> bool {
        self.is_investment()
            && ACQUISITION_TRANSACTION_TYPES.contains(&self.transaction_type.as_str())
    }

    /// Whether this activity consumes lots (Sale or Send).
    pub fn is_disposal(&self) -> bool {
        self.is_investment() && DISPOSAL_TRANSACTION_TYPES.contains(&self.transaction_type.as_str())
    }

    /// Validates the fields the lot engine depends on. Only investment
    /// activities carry quantity/price constraints; cash transactions pass.
    pub fn validate(&self) -> Result<(), ActivityError> {
        if !self.is_investment() {
            return Ok(());
        }

        if self.symbol.trim().is_empty() {
            return Err(ActivityError::MissingField {
                activity_id: self.id.clone(),
                field: "symbol".to_string(),
            });
        }
        if self.quantity <= Decimal::ZERO {
            return Err(ActivityError::InvalidQuantity {
                activity_id: self.id.clone(),
                quantity: self.quantity,
            });
        }
        if self.price < Decimal::ZERO {
            return Err(ActivityError::InvalidPrice {
                activity_id: self.id.clone(),
                price: self.price,
            });
        }
        if self.fee < Decimal::ZERO {
            return Err(ActivityError::InvalidFee {
                activity_id: self.id.clone(),
                fee: self.fee,
            });
        }
        if self.transaction_type == TRANSACTION_TYPE_SEND
            && self.to_account.as_deref().unwrap_or("").trim().is_empty()
        {
            return Err(ActivityError::MissingDestinationAccount(self.id.clone()));
        }

        Ok(())
    }
}
