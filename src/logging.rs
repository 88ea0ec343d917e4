use tracing_subscriber::filter::EnvFilter;

static CRATE_NAME: &str = env!("CARGO_CRATE_NAME");

/// Logs to stderr, stdout only carries the rendered rewards.
///
/// `RUST_LOG` takes precedence over the verbosity given on the command line.
pub fn set_up(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true)
        .init();
}

fn directives(verbosity: u8) -> String {
    format!("warn,{}={}", CRATE_NAME, max_level(verbosity))
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
