//! Load — source configuration from a TOML file or environment variables.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::model::{ListenerConfig, ValidatedListener};
use crate::error::{ConfigError, Result};
use crate::target::SyslogTargetConfig;

pub const CONFIG_FILE_ENV: &str = "SYSLOG_SOURCE_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "/etc/syslog-source/source.toml";
pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:514";

/// Every listener declared for the syslog source.
///
/// ```toml
/// [[listener]]
/// address = "0.0.0.0:514"
/// protocol = "udp"
/// syslog_format = "rfc3164"
///
/// [[listener]]
/// address = "0.0.0.0:6514"
/// labels = { job = "syslog-tls" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyslogSourceConfig {
    #[serde(default)]
    pub listener: Vec<ListenerConfig>,
}

impl SyslogSourceConfig {
    /// Load configuration from file, falling back to environment variables
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)
        } else {
            tracing::info!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: SyslogSourceConfig = toml::from_str(contents)?;
        tracing::debug!(listeners = config.listener.len(), "parsed syslog source config");
        Ok(config)
    }

    /// Build a single listener from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Build a single listener from `lookup`. Values start from the listener
    /// defaults and are overridden by whatever is set; protocol and format
    /// are left for [`ListenerConfig::validate`] to judge.
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut listener = ListenerConfig::default();
        listener.address =
            lookup("SYSLOG_LISTEN_ADDRESS").unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_string());

        if let Some(protocol) = lookup("SYSLOG_LISTEN_PROTOCOL") {
            listener.protocol = protocol;
        }
        if let Some(format) = lookup("SYSLOG_FORMAT") {
            listener.syslog_format = format;
        }
        if let Some(timeout) = lookup("SYSLOG_IDLE_TIMEOUT") {
            listener.idle_timeout = parse_duration("SYSLOG_IDLE_TIMEOUT", &timeout)?;
        }
        if let Some(max) = parse_env::<_, usize>(&lookup, "SYSLOG_MAX_MESSAGE_LENGTH")? {
            listener.max_message_length = max;
        }
        if let Some(flag) = parse_env::<_, bool>(&lookup, "SYSLOG_LABEL_STRUCTURED_DATA")? {
            listener.label_structured_data = flag;
        }
        if let Some(flag) = parse_env::<_, bool>(&lookup, "SYSLOG_USE_INCOMING_TIMESTAMP")? {
            listener.use_incoming_timestamp = flag;
        }
        if let Some(flag) = parse_env::<_, bool>(&lookup, "SYSLOG_USE_RFC5424_MESSAGE")? {
            listener.use_rfc5424_message = flag;
        }

        Ok(Self {
            listener: vec![listener],
        })
    }

    /// Validate every listener block and its TLS block. First error wins.
    pub fn validate(&self) -> Result<()> {
        for listener in &self.listener {
            listener.validate()?;
            if let Some(tls) = &listener.tls_config {
                tls.validate()?;
            }
        }
        Ok(())
    }

    /// Validate all listeners, then convert them. Nothing is converted unless
    /// every block is valid.
    pub fn into_targets(self) -> Result<Vec<SyslogTargetConfig>> {
        let validated = self
            .listener
            .into_iter()
            .map(ListenerConfig::into_validated)
            .collect::<Result<Vec<ValidatedListener>>>()?;
        Ok(validated.into_iter().map(ValidatedListener::convert).collect())
    }
}

fn parse_env<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::invalid_env(key, raw)),
        None => Ok(None),
    }
}

fn parse_duration(key: &'static str, raw: &str) -> Result<Duration> {
    humantime::parse_duration(raw.trim()).map_err(|_| ConfigError::invalid_env(key, raw))
}
