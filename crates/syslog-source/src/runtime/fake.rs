//! Fake — test double for the listener runtime.
//!
//! [`FakeRuntime`] records every target it is asked to start and can be
//! told to refuse a given address.

use std::sync::Mutex;

use super::listener::{ListenerRuntime, RuntimeError};
use crate::target::SyslogTargetConfig;

#[derive(Default)]
pub struct FakeRuntime {
    started: Mutex<Vec<SyslogTargetConfig>>,
    refuse_address: Option<String>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail `start` for targets bound to `address`.
    pub fn refusing(address: impl Into<String>) -> Self {
        Self {
            started: Mutex::new(Vec::new()),
            refuse_address: Some(address.into()),
        }
    }

    pub fn started(&self) -> Vec<SyslogTargetConfig> {
        self.started
            .lock()
            .map(|started| started.clone())
            .unwrap_or_default()
    }
}

impl ListenerRuntime for FakeRuntime {
    fn start(&self, target: SyslogTargetConfig) -> Result<(), RuntimeError> {
        if self.refuse_address.as_deref() == Some(target.listen_address.as_str()) {
            return Err(format!("address {} already in use", target.listen_address).into());
        }
        self.started
            .lock()
            .map_err(|_| "fake runtime state poisoned")?
            .push(target);
        Ok(())
    }
}
