//! HTML serialization
//!
//! Serializes markup trees to HTML strings.
//!
//! Key features:
//! - Text and attribute escaping
//! - Void element handling
//! - Raw text elements (script/style) passed through unescaped

use crate::node::{Element, Node};

/// HTML serializer
#[derive(Debug, Clone)]
pub struct HtmlSerializer {
    /// Whether to format output with indentation
    pub pretty_print: bool,
    /// Indentation string
    pub indent: String,
}

/// Void elements (self-closing, no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Raw text elements (no escaping for content)
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self {
            pretty_print: true,
            indent: "  ".to_string(),
        }
    }

    /// Serialize a node and its descendants
    pub fn serialize(&self, node: &Node) -> String {
        let mut output = String::new();
        self.serialize_node(node, &mut output, 0);
        output
    }

    fn serialize_node(&self, node: &Node, output: &mut String, depth: usize) {
        match node {
            Node::Element(element) => self.serialize_element(element, output, depth),
            Node::Text(text) => escape_text(text, output),
        }
    }

    fn serialize_element(&self, element: &Element, output: &mut String, depth: usize) {
        let tag = element.tag();
        let is_void = VOID_ELEMENTS.contains(&tag);
        let is_raw = RAW_TEXT_ELEMENTS.contains(&tag);

        if self.pretty_print && depth > 0 {
            output.push('\n');
            for _ in 0..depth {
                output.push_str(&self.indent);
            }
        }

        output.push('<');
        output.push_str(tag);

        for attr in element.attributes().iter() {
            output.push(' ');
            output.push_str(&attr.name);
            if !attr.value.is_empty() {
                output.push_str("=\"");
                escape_attribute(&attr.value, output);
                output.push('"');
            }
        }

        if is_void {
            output.push_str(" />");
            return;
        }
        output.push('>');

        if is_raw {
            for child in element.children() {
                if let Node::Text(text) = child {
                    output.push_str(text);
                }
            }
        } else {
            for child in element.children() {
                self.serialize_node(child, output, depth + 1);
            }
        }

        if self.pretty_print && element.children().iter().any(Node::is_element) {
            output.push('\n');
            for _ in 0..depth {
                output.push_str(&self.indent);
            }
        }
        output.push_str("</");
        output.push_str(tag);
        output.push('>');
    }
}

/// Serialize a node including itself (outerHTML)
pub fn outer_html(node: &Node) -> String {
    HtmlSerializer::new().serialize(node)
}

/// Escape text content for HTML
fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}
