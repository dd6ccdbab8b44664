//! Convert — bridge from a validated listener block to runtime parameters.

use super::{LabelSet, SyslogTargetConfig, TargetSyslogFormat};
use crate::conf::format::SyslogFormat;
use crate::conf::model::{ListenerConfig, ValidatedListener};
use crate::error::Result;

impl From<SyslogFormat> for TargetSyslogFormat {
    fn from(format: SyslogFormat) -> Self {
        match format {
            SyslogFormat::Rfc3164 => TargetSyslogFormat::Rfc3164,
            SyslogFormat::Rfc5424 => TargetSyslogFormat::Rfc5424,
        }
    }
}

impl ValidatedListener {
    /// Map the block into the runtime's parameter shape. Pure.
    pub fn convert(self) -> SyslogTargetConfig {
        let ValidatedListener {
            config,
            protocol,
            format,
        } = self;

        let labels: LabelSet = config.labels.into_iter().collect();
        let tls_config = config.tls_config.as_ref().map(|tls| tls.convert());

        SyslogTargetConfig {
            listen_address: config.address,
            listen_protocol: protocol,
            idle_timeout: config.idle_timeout,
            label_structured_data: config.label_structured_data,
            labels,
            use_incoming_timestamp: config.use_incoming_timestamp,
            use_rfc5424_message: config.use_rfc5424_message,
            max_message_length: config.max_message_length,
            tls_config,
            syslog_format: format.into(),
        }
    }
}

impl ListenerConfig {
    /// Validate, then convert.
    pub fn convert(self) -> Result<SyslogTargetConfig> {
        Ok(self.into_validated()?.convert())
    }
}
