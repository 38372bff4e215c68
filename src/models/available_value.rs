//! Output record for one available subnet.

/// One `availableValues` entry of the rendered property document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableValue {
    /// `Subnet: <cidr>`
    pub display_name: String,
    /// Always empty.
    pub description: String,
    /// `<cidr>:<tag><index>`
    pub value: String,
}

impl AvailableValue {
    pub fn new(cidr: &str, index: u32, tag: &str) -> AvailableValue {
        AvailableValue {
            display_name: format!("Subnet: {cidr}"),
            description: String::new(),
            value: format!("{cidr}:{tag}{index}"),
        }
    }
}
