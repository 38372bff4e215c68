//! XML property document output.
//!
//! Layout follows a tab-indented pretty print: declaration line, one element
//! per line, empty elements self-closed.

use crate::config::VALUE_TAG;
use crate::models::AvailableValue;
use crate::processing::subnet_index;

const XML_DECLARATION: &str = r#"<?xml version="1.0" ?>"#;
const ROOT: &str = "Property";
const ENTRY: &str = "availableValues";

/// Escape text content for use between tags.
pub fn escape_xml_text(input: &str) -> String {
    if input.contains(['&', '<', '>', '"']) {
        input
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    } else {
        input.to_string()
    }
}

/// One `<name>text</name>` line, or `<name/>` when text is empty.
fn leaf(depth: usize, name: &str, text: &str) -> String {
    let indent = "\t".repeat(depth);
    if text.is_empty() {
        format!("{indent}<{name}/>")
    } else {
        format!("{indent}<{name}>{}</{name}>", escape_xml_text(text))
    }
}

/// Build the output records for the available cidrs, keeping their order.
pub fn available_values(available: &[String]) -> Vec<AvailableValue> {
    available
        .iter()
        .filter_map(|cidr| match subnet_index(cidr) {
            Some(index) => Some(AvailableValue::new(cidr, index, VALUE_TAG)),
            None => {
                log::warn!("Skipping cidr without index: {cidr}");
                None
            }
        })
        .collect()
}

/// Render the available cidrs as a `Property` document.
pub fn render(available: &[String]) -> String {
    let values = available_values(available);
    log::info!("Rendering {} available subnet(s)", values.len());

    let mut lines = vec![XML_DECLARATION.to_string()];
    if values.is_empty() {
        lines.push(format!("<{ROOT}/>"));
    } else {
        lines.push(format!("<{ROOT}>"));
        for av in &values {
            lines.push(format!("\t<{ENTRY}>"));
            lines.push(leaf(2, "displayName", &av.display_name));
            lines.push(leaf(2, "description", &av.description));
            lines.push(leaf(2, "value", &av.value));
            lines.push(format!("\t</{ENTRY}>"));
        }
        lines.push(format!("</{ROOT}>"));
    }
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml_text() {
        assert_eq!(escape_xml_text("10.1.3.0/24"), "10.1.3.0/24");
        assert_eq!(escape_xml_text("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }

    #[test]
    fn test_render_single() {
        let xml = render(&["10.1.3.0/24".to_string()]);
        let expected = "<?xml version=\"1.0\" ?>\n\
            <Property>\n\
            \t<availableValues>\n\
            \t\t<displayName>Subnet: 10.1.3.0/24</displayName>\n\
            \t\t<description/>\n\
            \t\t<value>10.1.3.0/24:psstack3</value>\n\
            \t</availableValues>\n\
            </Property>\n";
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_leaf() {
        assert_eq!(leaf(2, "description", ""), "\t\t<description/>");
        assert_eq!(leaf(1, "value", "a&b"), "\t<value>a&amp;b</value>");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "<?xml version=\"1.0\" ?>\n<Property/>\n");
    }

    #[test]
    fn test_render_keeps_order() {
        let available = vec!["10.1.2.0/24".to_string(), "10.1.10.0/24".to_string()];
        let xml = render(&available);
        let pos2 = xml.find("psstack2<").unwrap();
        let pos10 = xml.find("psstack10<").unwrap();
        assert!(pos2 < pos10);
        assert_eq!(xml.matches("<availableValues>").count(), 2);
        assert_eq!(render(&available), xml);
    }

    #[test]
    fn test_available_values_skips_unindexed() {
        let values = available_values(&["10.1.4.0/24".to_string(), "bogus".to_string()]);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].value, "10.1.4.0/24:psstack4");
    }
}
