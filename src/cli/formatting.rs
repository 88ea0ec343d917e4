use std::collections::BTreeMap;

use comfy_table::Table;
use serde::Serialize;

use crate::points::Points;
use crate::rewards::{Aggregation, MonthlyPoints, TotalsCache};
use crate::transaction::{CustomerId, Month};

pub fn format_rewards_screen(aggregation: &Aggregation, totals: &mut TotalsCache) -> String {
    let mut components = vec![title("Customer Reward Points")];

    if aggregation.points.is_empty() {
        components.push("No reward points to show".to_string());
    }

    for (customer_id, monthly_points) in aggregation.points.iter() {
        let mut table = Table::new();
        table.set_header(vec!["Month", "Points"]);

        for (month, points) in monthly_points.iter() {
            table.add_row(vec![month_name(*month), points.to_string()]);
        }
        table.add_row(vec![
            "Total".to_string(),
            totals.total_of(&aggregation.points, *customer_id).to_string(),
        ]);

        components.push(format!(
            "{}\n{}",
            title(&format!("Customer {}", customer_id)),
            table
        ));
    }

    if !aggregation.skipped.is_empty() {
        let skipped = aggregation
            .skipped
            .iter()
            .map(|error| format!("- {}", error))
            .collect::<Vec<String>>()
            .join("\n");
        components.push(format!("{}\n{}", title("Skipped transactions"), skipped));
    }

    components.push(format!("Release: {}", env!("RELEASE")));

    components.join("\n\n")
}

#[derive(Serialize)]
struct RewardsReport<'a> {
    customers: BTreeMap<CustomerId, CustomerReport<'a>>,
    skipped: Vec<String>,
}

#[derive(Serialize)]
struct CustomerReport<'a> {
    months: &'a MonthlyPoints,
    total: Points,
}

pub fn format_rewards_json(
    aggregation: &Aggregation,
    totals: &mut TotalsCache,
) -> Result<String, serde_json::Error> {
    let totals = totals.totals(&aggregation.points);
    let report = RewardsReport {
        customers: aggregation
            .points
            .iter()
            .map(|(customer_id, months)| {
                let total = totals.get(customer_id).copied().unwrap_or_default();
                (*customer_id, CustomerReport { months, total })
            })
            .collect(),
        skipped: aggregation.skipped.iter().map(|error| error.to_string()).collect(),
    };

    serde_json::to_string_pretty(&report)
}

fn month_name(month: Month) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|month| chrono::Month::try_from(month).ok())
        .map(|month| month.name().to_string())
        .unwrap_or_else(|| month.to_string())
}

fn title(string: &str) -> String {
    let string_length = string.len();
    string.to_string() + "\n" + &"=".repeat(string_length)
}
