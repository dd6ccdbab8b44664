//! Listener — the seam between normalized configuration and whatever opens sockets.

use crate::target::SyslogTargetConfig;

pub type RuntimeError = Box<dyn std::error::Error + Send + Sync>;

/// Consumer of converted listener parameters.
///
/// Implementations own socket lifecycle and parsing. They only ever receive
/// targets produced by the conversion bridge.
pub trait ListenerRuntime: Send + Sync {
    fn start(&self, target: SyslogTargetConfig) -> Result<(), RuntimeError>;
}

/// Logs each target instead of binding it. TLS material is loaded so that
/// bad certificates surface during a check run.
#[derive(Debug, Default)]
pub struct DryRunRuntime;

impl ListenerRuntime for DryRunRuntime {
    fn start(&self, target: SyslogTargetConfig) -> Result<(), RuntimeError> {
        if let Some(tls) = &target.tls_config {
            tls.build_server_config()?;
        }
        tracing::info!(
            address = %target.listen_address,
            protocol = %target.listen_protocol,
            format = ?target.syslog_format,
            idle_timeout = ?target.listen_protocol.is_stream().then_some(target.idle_timeout),
            max_message_length = target.max_message_length,
            tls = target.tls_config.is_some(),
            labels = %target.labels,
            "syslog listener ready (dry run)"
        );
        Ok(())
    }
}
