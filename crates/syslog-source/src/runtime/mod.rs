//! Runtime module — logging, boot, the listener seam, and TLS materialization.

pub mod boot;
#[cfg(test)]
pub mod fake;
pub mod listener;
pub mod tls;
