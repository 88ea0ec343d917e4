#[cfg(test)]
use mockall::automock;
use rust_decimal_macros::dec;
use tracing::info;

use crate::error::Error;
use crate::transaction::Transaction;
use crate::vault::{Vault, VaultReadable};

pub type TransactionsVaultValues = Vec<Transaction>;

impl VaultReadable for TransactionsVaultValues {
    const KEY: &'static str = "transactions";
}

/// Where the batch of transactions to reward comes from.
///
/// A fetch either returns the whole batch or fails.
#[cfg_attr(test, automock)]
pub trait TransactionSource {
    fn name(&self) -> String;
    fn fetch(&self) -> Result<Vec<Transaction>, Error>;
}

pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(101, dec!(150), "2024-01-15"),
        Transaction::new(101, dec!(175), "2024-02-15"),
        Transaction::new(101, dec!(200), "2024-03-15"),
        Transaction::new(202, dec!(250), "2024-04-10"),
        Transaction::new(202, dec!(190), "2024-05-10"),
        Transaction::new(202, dec!(300), "2024-06-10"),
    ]
}

/// The built-in sample purchases of two customers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleSource;

impl TransactionSource for SampleSource {
    fn name(&self) -> String {
        "sample data".to_string()
    }

    fn fetch(&self) -> Result<Vec<Transaction>, Error> {
        Ok(sample_transactions())
    }
}

/// Transactions stored under the `transactions` key of a vault.
#[derive(Debug, Clone)]
pub struct VaultSource<V: Vault> {
    vault: V,
}

impl<V: Vault> VaultSource<V> {
    pub fn new(vault: V) -> VaultSource<V> {
        VaultSource { vault }
    }
}

impl<V: Vault> TransactionSource for VaultSource<V> {
    fn name(&self) -> String {
        format!("vault {}", self.vault.path().display())
    }

    fn fetch(&self) -> Result<Vec<Transaction>, Error> {
        let transactions = TransactionsVaultValues::from_vault(&self.vault)
            .map_err(|error| Error::source_unavailable(self.name(), error))?;
        info!(count = transactions.len(), source = %self.name(), "Fetched transactions");
        Ok(transactions)
    }
}
