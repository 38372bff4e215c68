//! Error kinds surfaced by the report.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// One or more required `OS_*` variables are absent or empty.
    #[error("missing required environment variable(s): {}", .missing.join(", "))]
    Configuration { missing: Vec<String> },

    /// Authentication or subnet listing against the cloud failed.
    #[error("OpenStack request failed: {0}")]
    RemoteService(String),
}

impl ReportError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ReportError::Configuration { .. } => 1,
            ReportError::RemoteService(_) => 2,
        }
    }
}

impl From<openstack::Error> for ReportError {
    fn from(e: openstack::Error) -> Self {
        ReportError::RemoteService(e.to_string())
    }
}
