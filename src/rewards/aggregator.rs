use clap::ValueEnum;
use rust_decimal_macros::dec;
use tracing::{debug, info, warn};

use crate::error::ComputationError;
use crate::points::{checked_points, Points};
use crate::rewards::{total_for, RewardPoints};
use crate::transaction::{Month, Transaction};

/// What to do with a transaction that cannot be aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InvalidTransactionPolicy {
    /// Abort the whole aggregation on the first invalid transaction.
    #[default]
    Fail,
    /// Leave invalid transactions out and report them.
    Skip,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Aggregation {
    pub points: RewardPoints,
    pub skipped: Vec<ComputationError>,
}

/// Reward points of every customer, per month.
///
/// Fails on the first transaction that has an unreadable date, a negative
/// amount, or points that would not fit in a `Decimal`. No partial result is
/// returned.
pub fn aggregate(transactions: &[Transaction]) -> Result<RewardPoints, ComputationError> {
    aggregate_with(transactions, InvalidTransactionPolicy::Fail).map(|aggregation| aggregation.points)
}

pub fn aggregate_with(
    transactions: &[Transaction],
    policy: InvalidTransactionPolicy,
) -> Result<Aggregation, ComputationError> {
    let mut aggregation = Aggregation::default();

    for (index, transaction) in transactions.iter().enumerate() {
        let added = month_and_points(index, transaction)
            .and_then(|(month, points)| add_points(&mut aggregation.points, index, transaction, month, points));

        if let Err(error) = added {
            match policy {
                InvalidTransactionPolicy::Fail => return Err(error),
                InvalidTransactionPolicy::Skip => {
                    warn!(%error, "Skipping transaction");
                    aggregation.skipped.push(error);
                }
            }
        }
    }

    info!(
        transactions = transactions.len(),
        customers = aggregation.points.len(),
        skipped = aggregation.skipped.len(),
        "Aggregated reward points"
    );

    Ok(aggregation)
}

fn month_and_points(index: usize, transaction: &Transaction) -> Result<(Month, Points), ComputationError> {
    let month = transaction.month().ok_or_else(|| ComputationError::InvalidDate {
        index,
        customer_id: transaction.customer_id,
        date: transaction.date.clone(),
    })?;

    if transaction.amount < dec!(0) {
        return Err(ComputationError::NegativeAmount {
            index,
            customer_id: transaction.customer_id,
            amount: transaction.amount,
        });
    }

    let points = checked_points(transaction.amount).ok_or(ComputationError::AmountTooLarge {
        index,
        customer_id: transaction.customer_id,
        amount: transaction.amount,
    })?;

    Ok((month, points))
}

/// Adds `points` to the month bucket, leaving `reward_points` untouched when
/// the customer's total would overflow.
fn add_points(
    reward_points: &mut RewardPoints,
    index: usize,
    transaction: &Transaction,
    month: Month,
    points: Points,
) -> Result<(), ComputationError> {
    let customer_id = transaction.customer_id;
    let overflow = ComputationError::PointsOverflow { index, customer_id };

    // Points are never negative: a customer's total bounds each of its months.
    let (current, customer_total) = match reward_points.get(&customer_id) {
        Some(monthly_points) => (
            monthly_points.get(&month).copied().unwrap_or(dec!(0)),
            total_for(monthly_points),
        ),
        None => (dec!(0), dec!(0)),
    };
    customer_total.checked_add(points).ok_or_else(|| overflow.clone())?;
    let month_points = current.checked_add(points).ok_or(overflow)?;

    debug!(index, customer_id, month, %points, "Adding transaction points");

    reward_points
        .entry(customer_id)
        .or_default()
        .insert(month, month_points);
    Ok(())
}
