//! Output formatting for the subnet report.
//!
//! - [`xml`] - `Property` document for the provisioning tool

mod xml;

pub use xml::{available_values, escape_xml_text, render};
