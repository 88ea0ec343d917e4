use chrono::{DateTime, Datelike, NaiveDate};
use serde::Deserialize;

use crate::points::Figure;

pub type CustomerId = u64;
/// Calendar month, January is 1.
pub type Month = u32;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    #[serde(alias = "customerId")]
    pub customer_id: CustomerId,
    /// A JSON string or number, read exactly either way.
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub amount: Figure,
    /// Kept as supplied, it is only parsed when the transaction is aggregated.
    pub date: String,
}

impl Transaction {
    pub fn new(customer_id: CustomerId, amount: Figure, date: &str) -> Transaction {
        Transaction {
            customer_id,
            amount,
            date: date.to_string(),
        }
    }

    /// Calendar date of the purchase, `None` if `date` is neither a
    /// `YYYY-MM-DD` date nor an RFC 3339 timestamp.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let date = self.date.trim();
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|d| d.date_naive()))
    }

    pub fn month(&self) -> Option<Month> {
        self.calendar_date().map(|date| date.month())
    }
}


#[allow(non_snake_case)]
#[cfg(test)]
mod deserialize_tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::Transaction;

    #[test]
    fn deserialize__snake_case() {
        let transaction: Transaction = serde_json::from_str(
            r#"{"customer_id": 101, "amount": "150.25", "date": "2024-01-15"}"#,
        )
        .unwrap();
        assert_eq!(transaction, Transaction::new(101, dec!(150.25), "2024-01-15"));
    }

    #[test]
    fn deserialize__camel_case_customer_id() {
        let transaction: Transaction = serde_json::from_str(
            r#"{"customerId": 202, "amount": "250", "date": "2024-04-10"}"#,
        )
        .unwrap();
        assert_eq!(transaction, Transaction::new(202, dec!(250), "2024-04-10"));
    }

    #[test]
    fn deserialize__numeric_amount() {
        let transaction: Transaction = serde_json::from_str(
            r#"{"customerId": 101, "amount": 150, "date": "2024-01-15"}"#,
        )
        .unwrap();
        assert_eq!(transaction, Transaction::new(101, dec!(150), "2024-01-15"));
    }

    #[test]
    fn deserialize__numeric_fractional_amount_is_exact() {
        let transaction: Transaction = serde_json::from_str(
            r#"{"customer_id": 101, "amount": 150.25, "date": "2024-01-15"}"#,
        )
        .unwrap();
        assert_eq!(transaction.amount, dec!(150.25));

        let transaction: Transaction = serde_json::from_str(
            r#"{"customer_id": 101, "amount": 0.1, "date": "2024-01-15"}"#,
        )
        .unwrap();
        assert_eq!(transaction.amount, dec!(0.1));
    }

    #[test]
    fn deserialize__amount_not_a_number() {
        let result: Result<Transaction, _> =
            serde_json::from_str(r#"{"customer_id": 101, "amount": "ten", "date": "2024-01-15"}"#);
        assert!(result.is_err());

        let result: Result<Transaction, _> =
            serde_json::from_str(r#"{"customer_id": 101, "amount": true, "date": "2024-01-15"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize__missing_field() {
        let result: Result<Transaction, _> =
            serde_json::from_str(r#"{"customer_id": 101, "amount": "150"}"#);
        assert!(result.is_err());
    }
}
