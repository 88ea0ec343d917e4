pub mod cli;
pub mod error;
pub mod logging;
pub mod points;
pub mod rewards;
pub mod source;
pub mod transaction;
pub mod vault;
