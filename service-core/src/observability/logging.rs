use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`. Safe to call more than once:
/// later calls leave the first subscriber in place.
pub fn init_tracing(service_name: &str, log_level: &str, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let result = if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .flatten_event(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()
    };

    match result {
        Ok(()) => tracing::debug!(service = %service_name, "Tracing initialized"),
        Err(e) => tracing::debug!(
            service = %service_name,
            error = %e,
            "Tracing already initialized, keeping existing subscriber"
        ),
    }
}
