use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when `RUST_LOG` is unset: portal crates at info,
/// sqlx statement logging kept quiet.
const DEFAULT_DIRECTIVES: &str = "info,sqlx=warn";

/// Initialize structured stdout tracing. Call once at service startup;
/// `RUST_LOG` overrides the default directives.
///
/// Safe to call multiple times — subsequent calls are silently ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
