//! Format — registry of the syslog dialects and transports a listener accepts.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Syslog message dialect the runtime parser should expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SyslogFormat {
    /// Legacy BSD syslog
    Rfc3164,
    /// Structured syslog
    #[default]
    Rfc5424,
}

impl SyslogFormat {
    pub const ALL: [SyslogFormat; 2] = [SyslogFormat::Rfc3164, SyslogFormat::Rfc5424];

    pub fn as_str(&self) -> &'static str {
        match self {
            SyslogFormat::Rfc3164 => "rfc3164",
            SyslogFormat::Rfc5424 => "rfc5424",
        }
    }
}

impl fmt::Display for SyslogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the canonical identifiers.
impl FromStr for SyslogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ConfigError::invalid_syslog_format(s))
    }
}

/// Transport used for the listener socket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListenProtocol {
    #[default]
    Tcp,
    Udp,
}

impl ListenProtocol {
    pub const ALL: [ListenProtocol; 2] = [ListenProtocol::Tcp, ListenProtocol::Udp];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListenProtocol::Tcp => "tcp",
            ListenProtocol::Udp => "udp",
        }
    }

    /// Stream transports keep connections open and are subject to the idle timeout.
    pub fn is_stream(&self) -> bool {
        matches!(self, ListenProtocol::Tcp)
    }
}

impl fmt::Display for ListenProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListenProtocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|protocol| protocol.as_str() == s)
            .ok_or_else(|| ConfigError::invalid_protocol(s))
    }
}
