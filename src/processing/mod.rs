//! Subnet data processing logic.
//!
//! - [`classify`] - Index extraction and managed range filtering
//! - [`pool`] - Candidate pool generation
//! - [`available`] - Pool minus existing, ordered by index

mod available;
mod classify;
mod pool;

// Re-export public functions
pub use available::compute_available;
pub use classify::{filter_existing, in_managed_range, subnet_index};
pub use pool::build_candidate_pool;
