//! Conf module — listener model, format registry, TLS block, and loading.

pub mod format;
pub mod load;
pub mod model;
pub mod tls;

pub use format::{ListenProtocol, SyslogFormat};
pub use load::SyslogSourceConfig;
pub use model::{ListenerConfig, ValidatedListener};
pub use tls::{TlsConfig, TlsVersion};
