//! Domain models for the subnet report.
//!
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`AvailableValue`] - one entry of the rendered document

mod available_value;
mod ipv4;

// Re-export public types
pub use available_value::AvailableValue;
pub use ipv4::Ipv4;
