//! Model — ListenerConfig, its defaults, and validation.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::format::{ListenProtocol, SyslogFormat};
use super::tls::TlsConfig;
use crate::error::Result;
use crate::target::{DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_MESSAGE_LENGTH};

/// A single declared syslog listener block.
///
/// `protocol` and `syslog_format` are kept as the operator wrote them and
/// only interpreted by [`ListenerConfig::validate`]; everything downstream
/// of validation works with [`ValidatedListener`]. Unknown keys are a parse
/// error, so a misspelled field never falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerConfig {
    pub address: String,
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(default = "default_idle_timeout", with = "humantime_serde")]
    pub idle_timeout: Duration,
    #[serde(default)]
    pub label_structured_data: bool,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub use_incoming_timestamp: bool,
    #[serde(default)]
    pub use_rfc5424_message: bool,
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsConfig>,
    #[serde(default = "default_syslog_format")]
    pub syslog_format: String,
}

fn default_protocol() -> String {
    ListenProtocol::default().as_str().to_string()
}

fn default_idle_timeout() -> Duration {
    DEFAULT_IDLE_TIMEOUT
}

fn default_max_message_length() -> usize {
    DEFAULT_MAX_MESSAGE_LENGTH
}

fn default_syslog_format() -> String {
    SyslogFormat::default().as_str().to_string()
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            protocol: default_protocol(),
            idle_timeout: default_idle_timeout(),
            label_structured_data: false,
            labels: HashMap::new(),
            use_incoming_timestamp: false,
            use_rfc5424_message: false,
            max_message_length: default_max_message_length(),
            tls_config: None,
            syslog_format: default_syslog_format(),
        }
    }
}

impl ListenerConfig {
    /// Reset every field to the package defaults.
    pub fn set_to_default(&mut self) {
        *self = Self::default();
    }

    /// Check the two enum-like fields. Stops at the first failure.
    ///
    /// Nothing else is inspected here: address syntax, length bounds and the
    /// TLS block are checked by their own owners.
    pub fn validate(&self) -> Result<()> {
        self.protocol.parse::<ListenProtocol>()?;
        self.syslog_format.parse::<SyslogFormat>()?;
        Ok(())
    }

    /// Validate, including the TLS block, and keep the parsed protocol and
    /// format.
    pub fn into_validated(self) -> Result<ValidatedListener> {
        let protocol = self.protocol.parse::<ListenProtocol>()?;
        let format = self.syslog_format.parse::<SyslogFormat>()?;
        if let Some(tls) = &self.tls_config {
            tls.validate()?;
        }
        Ok(ValidatedListener {
            config: self,
            protocol,
            format,
        })
    }
}

/// A listener block that has passed validation.
///
/// Only obtainable through [`ListenerConfig::into_validated`], so the
/// conversion bridge never sees an out-of-domain protocol or format.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedListener {
    pub(crate) config: ListenerConfig,
    pub(crate) protocol: ListenProtocol,
    pub(crate) format: SyslogFormat,
}

impl ValidatedListener {
    pub fn config(&self) -> &ListenerConfig {
        &self.config
    }

    pub fn protocol(&self) -> ListenProtocol {
        self.protocol
    }

    pub fn format(&self) -> SyslogFormat {
        self.format
    }
}
