/// Activity and transaction types.
///
/// Each constant carries the literal value recorded in the ledger. The
/// engines branch on these; anything else passes through untouched.

/// Ledger entry for a priced instrument (buys, sales, sends, rewards).
pub const ACTIVITY_TYPE_INVESTMENT: &str = "Investment";

/// Plain cash transaction; collected for persistence, never matched to lots.
pub const ACTIVITY_TYPE_TRANSACTION: &str = "Transaction";

/// Purchase of an instrument. Creates one open lot.
pub const TRANSACTION_TYPE_BUY: &str = "Buy";

/// Disposal of an instrument for cash. Consumes open lots.
pub const TRANSACTION_TYPE_SALE: &str = "Sale";

/// Transfer of quantity to another account. Consumes open lots and
/// recreates the moved quantity under the destination account.
pub const TRANSACTION_TYPE_SEND: &str = "Send";

/// Staking or promotional reward. Creates one open lot like a buy.
pub const TRANSACTION_TYPE_REWARDS: &str = "Rewards";

/// Transaction types that create lots.
pub const ACQUISITION_TRANSACTION_TYPES: [&str; 2] =
    [TRANSACTION_TYPE_BUY, TRANSACTION_TYPE_REWARDS];

/// Transaction types that consume lots.
pub const DISPOSAL_TRANSACTION_TYPES: [&str; 2] = [TRANSACTION_TYPE_SALE, TRANSACTION_TYPE_SEND];
