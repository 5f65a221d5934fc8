use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise defaults to debug output for this
/// crate. Calling it more than once is harmless — later calls are ignored.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weavepos=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
