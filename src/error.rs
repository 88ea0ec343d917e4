use crate::points::Figure;
use crate::transaction::CustomerId;

pub type SourceFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to fetch transactions from {source_name}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        reason: SourceFailure,
    },

    #[error("Failed to calculate reward points")]
    Computation(#[from] ComputationError),

    #[error("Failed to render reward points")]
    Render(#[from] serde_json::Error),
}

impl Error {
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl Into<SourceFailure>) -> Error {
        Error::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

/// The error followed by all its causes, `: ` separated.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut messages = vec![error.to_string()];
    let mut cause = error.source();
    while let Some(error) = cause {
        messages.push(error.to_string());
        cause = error.source();
    }
    messages.join(": ")
}

/// A transaction the aggregator could not fold into the reward points.
///
/// `index` is the position of the transaction in the fetched batch.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ComputationError {
    #[error("transaction #{index} of customer {customer_id} has an unreadable date '{date}'")]
    InvalidDate {
        index: usize,
        customer_id: CustomerId,
        date: String,
    },

    #[error("transaction #{index} of customer {customer_id} has a negative amount {amount}")]
    NegativeAmount {
        index: usize,
        customer_id: CustomerId,
        amount: Figure,
    },

    #[error("transaction #{index} of customer {customer_id} has an amount too large to reward: {amount}")]
    AmountTooLarge {
        index: usize,
        customer_id: CustomerId,
        amount: Figure,
    },

    #[error("transaction #{index} would take the points of customer {customer_id} over the maximum")]
    PointsOverflow { index: usize, customer_id: CustomerId },
}
