//! Tracing setup for hosts that do not install their own subscriber.

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive, e.g.
/// `temporal_picker_core=debug`.
pub const LOG_ENV: &str = "TEMPORAL_PICKER_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Installs a formatted tracing subscriber (idempotent).
///
/// Does nothing when another global subscriber is already set.
pub fn init_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .finish()
            .try_init();
        if result.is_err() {
            tracing::debug!("a global subscriber is already installed");
        }
    });
}
