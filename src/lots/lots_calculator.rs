//! Lot matching calculator.
//!
//! Pure batch transform: takes one ledger's chronologically ordered
//! activity stream plus the open lots it may consume, and returns the full
//! set of lot mutations, accepted activities and per-record rejections.
//! Persistence happens outside, as one batch per import.

use std::collections::HashSet;

use log::warn;
use rust_decimal::Decimal;

use crate::activities::{Activity, ActivityError, TRANSACTION_TYPE_SALE};
use crate::lots::lots_model::{DisposalPolicy, Lot, LotStatus};

/// A single activity rejected during import, with the reason. The rest of
/// the batch still processes.
#[derive(Debug, Clone)]
pub struct RejectedActivity {
    pub activity: Activity,
    pub error: ActivityError,
}

/// Everything a lot import run produced. `lots` holds every created or
/// mutated lot exactly once, ready for one bulk upsert; `activities` holds
/// the accepted records for bulk persistence.
#[derive(Debug, Default)]
pub struct LotImportOutcome {
    pub lots: Vec<Lot>,
    pub activities: Vec<Activity>,
    pub rejected: Vec<RejectedActivity>,
    /// Disposal activity ids that found no open lots to consume.
    pub unmatched_disposals: Vec<String>,
}

/// Applies one ledger's activity batch to its open lots.
///
/// Activities are sorted by date defensively; the sort is stable so
/// same-date entries keep their recorded order. Buys and rewards create
/// lots, sales and sends consume them in policy order, cash transactions
/// pass through, and malformed records are rejected individually.
pub fn apply_activities(
    ledger_id: &str,
    activities: Vec<Activity>,
    existing_open_lots: Vec<Lot>,
) -> LotImportOutcome {
    let mut sorted = activities;
    sorted.sort_by_key(|activity| activity.date);

    let mut working = existing_open_lots;
    let mut touched: HashSet<String> = HashSet::new();
    let mut outcome = LotImportOutcome::default();

    for activity in sorted {
        if activity.ledger_id != ledger_id {
            let error = ActivityError::LedgerMismatch {
                activity_id: activity.id.clone(),
                expected: ledger_id.to_string(),
                actual: activity.ledger_id.clone(),
            };
            warn!("Rejecting activity {}: {}", activity.id, error);
            outcome.rejected.push(RejectedActivity { activity, error });
            continue;
        }

        if let Err(error) = activity.validate() {
            warn!("Rejecting activity {}: {}", activity.id, error);
            outcome.rejected.push(RejectedActivity { activity, error });
            continue;
        }

        if activity.is_acquisition() {
            let lot = Lot::from_acquisition(ledger_id, &activity);
            touched.insert(lot.id.clone());
            // Replace rather than duplicate when the batch is replayed.
            if let Some(existing) = working.iter_mut().find(|l| l.id == lot.id) {
                *existing = lot;
            } else {
                working.push(lot);
            }
        } else if activity.is_disposal() {
            dispose(&activity, &mut working, &mut touched, &mut outcome);
        }
        // Cash transactions and unrecognized investment types fall through:
        // they are persisted as activities but never touch lots.

        outcome.activities.push(activity);
    }

    outcome.lots = working
        .into_iter()
        .filter(|lot| touched.contains(&lot.id))
        .collect();
    outcome
}

/// Consumes open lots for a sale or send, in FIFO or HIFO order depending
/// on the activity year.
fn dispose(
    activity: &Activity,
    working: &mut Vec<Lot>,
    touched: &mut HashSet<String>,
    outcome: &mut LotImportOutcome,
) {
    let policy = DisposalPolicy::for_date(activity.date);

    let mut candidates: Vec<usize> = working
        .iter()
        .enumerate()
        .filter(|(_, lot)| {
            lot.is_open()
                && !lot.remaining_quantity.is_zero()
                && lot.group == activity.group
                && lot.category == activity.category
                && lot.account == activity.account
                && lot.symbol == activity.symbol
        })
        .map(|(i, _)| i)
        .collect();

    candidates.sort_by_key(|&i| working[i].acquisition_date);
    if policy == DisposalPolicy::Hifo {
        // Stable, so equal costs stay oldest-first.
        candidates.sort_by(|&a, &b| working[b].unit_cost.cmp(&working[a].unit_cost));
    }

    if candidates.is_empty() {
        warn!(
            "No open lots match disposal {} ({} {} in account {})",
            activity.id, activity.quantity, activity.symbol, activity.account
        );
        outcome.unmatched_disposals.push(activity.id.clone());
        return;
    }

    let mut need = activity.quantity;
    let mut splits: Vec<Lot> = Vec::new();

    for &i in &candidates {
        if need <= Decimal::ZERO {
            break;
        }

        let consumed = need.min(working[i].remaining_quantity);
        need -= consumed;

        let is_sale = activity.transaction_type == TRANSACTION_TYPE_SALE;
        let fully_consumed;
        {
            let lot = &mut working[i];
            lot.remaining_quantity -= consumed;
            lot.transaction_date = activity.date;
            fully_consumed = lot.remaining_quantity.is_zero();
            touched.insert(lot.id.clone());

            if is_sale {
                if fully_consumed {
                    // Fully consumed: close the original in place, no split.
                    lot.status = LotStatus::Closed;
                    lot.sale_date = Some(activity.date);
                    lot.sale_quantity = consumed;
                    lot.sale_price = activity.price;
                }
            } else {
                lot.sent_quantity += consumed;
                lot.send_date = Some(activity.date);
                if fully_consumed {
                    lot.status = LotStatus::Closed;
                }
            }
        }

        if is_sale {
            if !fully_consumed {
                let mut split = split_lot(&working[i], activity, consumed);
                split.status = LotStatus::Closed;
                split.remaining_quantity = Decimal::ZERO;
                split.sale_date = Some(activity.date);
                split.sale_quantity = consumed;
                split.sale_price = activity.price;
                splits.push(split);
            }
        } else {
            // The moved quantity reappears as an open lot under the
            // destination account, carrying its account history.
            let source = &working[i];
            let mut split = split_lot(source, activity, consumed);
            split.account = activity.to_account.clone().unwrap_or_default();
            split.origin_account_chain =
                format!("{}:{}", source.origin_account_chain, source.account);
            splits.push(split);
        }
    }

    if need > Decimal::ZERO {
        warn!(
            "Disposal {} consumed all matching lots but is short {} {}",
            activity.id, need, activity.symbol
        );
    }

    for split in splits {
        touched.insert(split.id.clone());
        working.push(split);
    }
}

/// Seeds a split record from the lot a disposal consumed. Identity derives
/// from the source lot and the disposing activity, so a replayed batch
/// regenerates the same record. At most one split is emitted per source
/// lot per disposal.
fn split_lot(source: &Lot, activity: &Activity, consumed: Decimal) -> Lot {
    let mut split = source.clone();
    split.id = format!("{}:{}", source.id, activity.id);
    split.transaction_date = activity.date;
    split.status = LotStatus::Open;
    split.original_quantity = consumed;
    split.remaining_quantity = consumed;
    split.fee = activity.fee;
    split.sale_date = None;
    split.sale_quantity = Decimal::ZERO;
    split.sale_price = Decimal::ZERO;
    split.send_date = None;
    split.sent_quantity = Decimal::ZERO;
    split
}
