//! Boot — logging init, config load, validation, and listener start-up.

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::listener::ListenerRuntime;
use crate::conf::SyslogSourceConfig;

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "syslog_source=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Convert every declared listener and hand each to `runtime`.
///
/// All blocks are validated before the first `start`, so a bad declaration
/// never leaves a subset of listeners running. Returns how many started.
pub fn start_listeners(
    config: SyslogSourceConfig,
    runtime: &dyn ListenerRuntime,
) -> Result<usize, Box<dyn std::error::Error>> {
    let targets = config.into_targets().map_err(|e| {
        error!("Invalid syslog source configuration: {}", e);
        e
    })?;

    if targets.is_empty() {
        info!("No syslog listeners declared");
    }

    let mut started = 0;
    for target in targets {
        let address = target.listen_address.clone();
        runtime
            .start(target)
            .map_err(|e| -> Box<dyn std::error::Error> {
                error!("Failed to start syslog listener on {}: {}", address, e);
                e
            })?;
        started += 1;
    }
    Ok(started)
}

/// Load configuration (file or env) and start every listener on `runtime`.
pub fn boot(runtime: &dyn ListenerRuntime) -> Result<usize, Box<dyn std::error::Error>> {
    info!("Starting syslog source v{}", env!("CARGO_PKG_VERSION"));

    let config = SyslogSourceConfig::load()?;
    info!("Loaded configuration: {} listener(s)", config.listener.len());

    let started = start_listeners(config, runtime)?;
    info!("Started {} syslog listener(s)", started);
    Ok(started)
}
