//! Console logging for the `symbios-ribbon` binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a console subscriber.
///
/// Defaults to `info` globally and `debug` for this crate; `RUST_LOG` overrides both.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,symbios_ribbon=debug"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
