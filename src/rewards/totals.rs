use std::collections::BTreeMap;

use rust_decimal_macros::dec;
use tracing::debug;

use crate::points::Points;
use crate::rewards::{MonthlyPoints, RewardPoints};
use crate::transaction::CustomerId;

pub type CustomerTotals = BTreeMap<CustomerId, Points>;

/// Points a customer earned over all months.
pub fn total_for(monthly_points: &MonthlyPoints) -> Points {
    monthly_points.values().fold(dec!(0), |total, points| total + points)
}

pub fn customer_totals(reward_points: &RewardPoints) -> CustomerTotals {
    reward_points
        .iter()
        .map(|(customer_id, monthly_points)| (*customer_id, total_for(monthly_points)))
        .collect()
}

/// Customer totals of the last reward points it was asked about.
///
/// The totals are only recomputed when asked about reward points that are
/// not equal to the previous ones.
#[derive(Debug, Default)]
pub struct TotalsCache {
    reward_points: Option<RewardPoints>,
    totals: CustomerTotals,
    computations: usize,
}

impl TotalsCache {
    pub fn new() -> TotalsCache {
        TotalsCache::default()
    }

    pub fn totals(&mut self, reward_points: &RewardPoints) -> &CustomerTotals {
        if self.reward_points.as_ref() != Some(reward_points) {
            self.totals = customer_totals(reward_points);
            self.reward_points = Some(reward_points.clone());
            self.computations += 1;
            debug!(
                customers = reward_points.len(),
                computations = self.computations,
                "Computed customer totals"
            );
        }
        &self.totals
    }

    pub fn total_of(&mut self, reward_points: &RewardPoints, customer_id: CustomerId) -> Points {
        self.totals(reward_points)
            .get(&customer_id)
            .copied()
            .unwrap_or(dec!(0))
    }

    #[cfg(test)]
    fn computations(&self) -> usize {
        self.computations
    }
}
