// Module structure for the syslog source configuration crate.

pub mod error;

// Operator-facing configuration
pub mod conf;

// Runtime-facing parameters
pub mod target;

// Boot, logging, and the listener runtime seam
pub mod runtime;

pub use conf::{ListenerConfig, SyslogSourceConfig};
pub use error::{ConfigError, Result};
pub use target::SyslogTargetConfig;
