use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{prelude::*, EnvFilter, Registry};

/// Initializes application tracing, printing spans and events to stdout.
///
/// `RUST_LOG` takes precedence over `default_filter` when set.
pub fn init(default_filter: &str, is_development: bool) -> Result<(), SetGlobalDefaultError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(is_development)
        .with_line_number(is_development);

    let subscriber = Registry::default().with(filter).with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    println!("[TRACER] initialized with filter: {}", default_filter);
    Ok(())
}
