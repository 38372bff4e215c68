//! Runtime configuration.
//!
//! Constants for the managed address space plus the OpenStack credentials
//! read from `OS_*` environment variables.

use crate::error::ReportError;
use std::net::Ipv4Addr;
use std::path::PathBuf;

/// First third-octet index of the managed pool (inclusive).
pub const POOL_FIRST_INDEX: u8 = 1;
/// Last third-octet index of the managed pool (inclusive).
pub const POOL_LAST_INDEX: u8 = 19;
/// Network address of the first managed block, the rest are walked from here.
pub const POOL_BASE_ADDR: Ipv4Addr = Ipv4Addr::new(10, 1, POOL_FIRST_INDEX, 0);
/// Prefix length of every managed block.
pub const POOL_PREFIX_LEN: u8 = 24;
/// Tag placed between the cidr and its index in the rendered `value`.
pub const VALUE_TAG: &str = "psstack";

/// Required variables, in the order they are reported when missing.
pub const REQUIRED_VARS: [&str; 6] = [
    "OS_AUTH_URL",
    "OS_PROJECT_NAME",
    "OS_USERNAME",
    "OS_PASSWORD",
    "OS_USER_DOMAIN_NAME",
    "OS_PROJECT_DOMAIN_NAME",
];

/// Credentials for a single Keystone password authentication.
#[derive(Clone)]
pub struct Credentials {
    pub auth_url: String,
    pub project_name: String,
    pub username: String,
    pub password: String,
    pub user_domain_name: String,
    pub project_domain_name: String,
    /// `OS_CACERT`, PEM bundle added to the trust store.
    pub tls_ca_bundle_path: Option<PathBuf>,
}

impl Credentials {
    /// Load credentials from the process environment.
    pub fn from_env() -> Result<Credentials, ReportError> {
        Credentials::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through `lookup`, collecting every absent required variable.
    ///
    /// A variable set to an empty value is present; authentication decides
    /// whether it is usable.
    pub fn from_lookup<F>(lookup: F) -> Result<Credentials, ReportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|&&name| lookup(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            log::error!("Missing environment variables: {}", missing.join(", "));
            return Err(ReportError::Configuration { missing });
        }

        let required = |name: &str| {
            let value = lookup(name).unwrap_or_default();
            if value.trim().is_empty() {
                log::warn!("Environment variable {name} is set but empty");
            }
            value
        };
        let tls_ca_bundle_path = lookup("OS_CACERT")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Credentials {
            auth_url: required("OS_AUTH_URL"),
            project_name: required("OS_PROJECT_NAME"),
            username: required("OS_USERNAME"),
            password: required("OS_PASSWORD"),
            user_domain_name: required("OS_USER_DOMAIN_NAME"),
            project_domain_name: required("OS_PROJECT_DOMAIN_NAME"),
            tls_ca_bundle_path,
        })
    }
}

// Keep the password out of logs and panics.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_url", &self.auth_url)
            .field("project_name", &self.project_name)
            .field("username", &self.username)
            .field("password", &"***")
            .field("user_domain_name", &self.user_domain_name)
            .field("project_domain_name", &self.project_domain_name)
            .field("tls_ca_bundle_path", &self.tls_ca_bundle_path)
            .finish()
    }
}
