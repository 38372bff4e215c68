//! Report which managed `10.1.N.0/24` subnets are still free in an OpenStack
//! project, as an XML property document.
//!
//! Fetch -> Filter -> Derive pool -> Diff -> Sort -> Render.

pub mod cloud;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use config::Credentials;
use error::ReportError;
use cloud::Connection;
use std::collections::HashSet;

pub use cloud::connect;

/// Cidrs of the managed range currently in use in the project.
pub async fn list_existing_subnets(connection: &Connection) -> Result<HashSet<String>, ReportError> {
    let cidrs = cloud::list_subnet_cidrs(connection).await?;
    let existing = processing::filter_existing(cidrs.iter().map(String::as_str));
    log::info!(
        "{} of {} subnets are in the managed range",
        existing.len(),
        cidrs.len()
    );
    Ok(existing)
}

/// Render the document for a given set of existing cidrs.
///
/// Pure: the same `existing` always gives the same bytes.
pub fn build_report(existing: &HashSet<String>) -> String {
    let pool = processing::build_candidate_pool();
    let available = processing::compute_available(&pool, existing);
    output::render(&available)
}

/// Full run with the given credentials.
pub async fn run_with(credentials: &Credentials) -> Result<String, ReportError> {
    let connection = connect(credentials).await?;
    let existing = list_existing_subnets(&connection).await?;
    Ok(build_report(&existing))
}

/// Full run with credentials from the environment.
///
/// Missing variables are reported before any network call.
pub async fn run() -> Result<String, ReportError> {
    let credentials = Credentials::from_env()?;
    log::debug!("Loaded {credentials:?}");
    run_with(&credentials).await
}
