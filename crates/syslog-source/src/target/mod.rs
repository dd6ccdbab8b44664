//! Target — parameter shape consumed by the syslog listener runtime.

pub mod convert;

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::conf::format::ListenProtocol;
use crate::conf::tls::TlsVersion;

/// Idle time after which the runtime closes a stream connection.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(120);

/// Largest accepted message, in bytes.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 8192;

/// The runtime's own dialect enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetSyslogFormat {
    Rfc3164,
    Rfc5424,
}

/// Static labels attached to every record a listener produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(BTreeMap<String, String>);

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={:?}", name, value)?;
        }
        f.write_str("}")
    }
}

/// Where a PEM document comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum PemSource {
    Inline(String),
    File(PathBuf),
}

impl fmt::Debug for PemSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PemSource::Inline(_) => f.write_str("Inline(<redacted>)"),
            PemSource::File(path) => f.debug_tuple("File").field(path).finish(),
        }
    }
}

/// Concrete TLS settings, ready for [`TlsSettings::build_server_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsSettings {
    pub ca: Option<PemSource>,
    pub cert: Option<PemSource>,
    pub key: Option<PemSource>,
    pub insecure_skip_verify: bool,
    pub min_version: Option<TlsVersion>,
}

/// Normalized listener parameters handed to the runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct SyslogTargetConfig {
    pub listen_address: String,
    pub listen_protocol: ListenProtocol,
    pub idle_timeout: Duration,
    pub label_structured_data: bool,
    pub labels: LabelSet,
    pub use_incoming_timestamp: bool,
    pub use_rfc5424_message: bool,
    pub max_message_length: usize,
    pub tls_config: Option<TlsSettings>,
    pub syslog_format: TargetSyslogFormat,
}
