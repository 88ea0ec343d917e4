mod aggregator;
mod totals;

use std::collections::BTreeMap;

use crate::error::Error;
use crate::points::Points;
use crate::source::TransactionSource;
use crate::transaction::{CustomerId, Month};

pub use aggregator::{aggregate, aggregate_with, Aggregation, InvalidTransactionPolicy};
pub use totals::{customer_totals, total_for, CustomerTotals, TotalsCache};

/// Points accumulated by one customer, per calendar month.
pub type MonthlyPoints = BTreeMap<Month, Points>;
/// Points accumulated by every customer, per calendar month.
pub type RewardPoints = BTreeMap<CustomerId, MonthlyPoints>;

/// Fetches the whole batch of transactions, then aggregates it.
pub fn compute_rewards<S: TransactionSource + ?Sized>(
    source: &S,
    policy: InvalidTransactionPolicy,
) -> Result<Aggregation, Error> {
    let transactions = source.fetch()?;
    Ok(aggregate_with(&transactions, policy)?)
}
