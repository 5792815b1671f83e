//! Initialization of tracing for the browser console

use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::{MakeWebConsoleWriter, performance_layer};

/// Install the console subscriber, filtered to `log_level`
pub fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // The browser has no system clock for the formatter, and the console adds its own
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new());

    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .with(env_filter)
        .try_init()
        .is_err()
    {
        web_sys::console::warn_1(&"tracing subscriber was already installed".into());
    }
}
