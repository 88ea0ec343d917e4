use std::process::ExitCode;

use rewards::cli::rewards_operation;

fn main() -> ExitCode {
    rewards_operation()
}
