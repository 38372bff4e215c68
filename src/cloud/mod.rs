//! OpenStack cloud access.
//!
//! Authentication, the service catalog and the Neutron listing are handled by
//! the `openstack` crate; this module only adapts it to the report.

use crate::config::Credentials;
use crate::error::ReportError;
use colored::Colorize;

/// Authenticated handle to the cloud's network API.
pub struct Connection {
    cloud: openstack::Cloud,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection").finish_non_exhaustive()
    }
}

/// Authenticate once against Keystone, no retry.
///
/// The session is built from the same `OS_*` variables that `credentials`
/// was validated from, `OS_CACERT` included.
pub async fn connect(credentials: &Credentials) -> Result<Connection, ReportError> {
    log::info!(
        "Authenticating {user} on project {project} at {url}",
        user = credentials.username,
        project = credentials.project_name,
        url = credentials.auth_url.on_blue()
    );
    if let Some(path) = &credentials.tls_ca_bundle_path {
        log::debug!("Using CA bundle {}", path.display());
    }

    let cloud = openstack::Cloud::from_env().await.map_err(|e| {
        log::warn!("{failed} to authenticate: {e}", failed = "failed".on_red());
        ReportError::from(e)
    })?;
    Ok(Connection { cloud })
}

/// Cidr of every subnet visible to the project, listing consumed to the end.
pub async fn list_subnet_cidrs(connection: &Connection) -> Result<Vec<String>, ReportError> {
    let subnets = connection.cloud.list_subnets().await?;
    let cidrs: Vec<String> = subnets.iter().map(|s| s.cidr().to_string()).collect();
    log::info!("Got {} subnets from the network API", cidrs.len());
    log::trace!("cidrs={:?}", cidrs);
    Ok(cidrs)
}
