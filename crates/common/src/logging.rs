use tracing_subscriber::{fmt, EnvFilter};

/// Install the process-wide tracing subscriber.
///
/// `RUST_LOG` wins when set; `default_level` applies otherwise. Output goes
/// to stderr. Calling this more than once is a no-op.
pub fn init_logging(default_level: &str) {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging("debug");
        init_logging("debug");
    }
}
