//! Error — configuration errors surfaced to the operator at load time.

use std::fmt::Display;
use std::io;
use thiserror::Error;

use crate::conf::format::{ListenProtocol, SyslogFormat};

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(
        "syslog listener protocol should be either {}, got {}",
        quoted_alternatives(&ListenProtocol::ALL, '\''),
        .protocol
    )]
    InvalidProtocol { protocol: String },

    #[error(
        "syslog format should be either {}, got \"{}\"",
        quoted_alternatives(&SyslogFormat::ALL, '"'),
        .format
    )]
    InvalidSyslogFormat { format: String },

    #[error("invalid tls_config: {message}")]
    InvalidTls { message: String },

    /// An environment variable held a value that could not be parsed.
    #[error("environment variable {key} has invalid value '{value}'")]
    InvalidEnv { key: &'static str, value: String },
}

/// `'a' or 'b'` from a value registry, so messages track the legal set.
fn quoted_alternatives<T: Display>(values: &[T], quote: char) -> String {
    values
        .iter()
        .map(|value| format!("{quote}{value}{quote}"))
        .collect::<Vec<_>>()
        .join(" or ")
}

impl ConfigError {
    pub fn invalid_protocol(protocol: impl Into<String>) -> Self {
        Self::InvalidProtocol {
            protocol: protocol.into(),
        }
    }

    pub fn invalid_syslog_format(format: impl Into<String>) -> Self {
        Self::InvalidSyslogFormat {
            format: format.into(),
        }
    }

    pub fn invalid_tls(message: impl Into<String>) -> Self {
        Self::InvalidTls {
            message: message.into(),
        }
    }

    pub fn invalid_env(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnv {
            key,
            value: value.into(),
        }
    }
}
