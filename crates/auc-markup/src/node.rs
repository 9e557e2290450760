//! Markup nodes
//!
//! `Node` is the unit of the tree: an element with attributes and ordered
//! children, or a run of text. Nodes own their subtree; a finished tree is
//! handed to the caller by value and never referenced again by the producer.

use crate::attributes::AttributeList;

/// A node in a markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element with tag, attributes and children
    Element(Element),
    /// Text content
    Text(String),
}

impl Node {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Get the element if this is an element node
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get the element mutably
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: AttributeList,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: AttributeList::new(),
            children: Vec::new(),
        }
    }

    /// Create an element wrapping a single text child
    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(tag);
        element.append_child(Node::text(text));
        element
    }

    /// Tag name
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute collection
    #[inline]
    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Set an attribute, replacing any existing value for the name
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.set(name, value);
    }

    /// Append a child node
    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Ordered children
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterate over element children, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }
}

fn collect_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e.children(), out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node_accessors() {
        let node = Node::text("hello");
        assert!(node.is_text());
        assert!(!node.is_element());
        assert_eq!(node.as_text(), Some("hello"));
        assert_eq!(node.as_element(), None);
    }

    #[test]
    fn test_element_children_order() {
        let mut parent = Element::new("div");
        parent.append_child(Element::with_text("h1", "first"));
        parent.append_child(Node::text("between"));
        parent.append_child(Element::with_text("p", "second"));

        assert_eq!(parent.children().len(), 3);
        let tags: Vec<&str> = parent.child_elements().map(Element::tag).collect();
        assert_eq!(tags, ["h1", "p"]);
    }

    #[test]
    fn test_text_content_recurses() {
        let mut inner = Element::with_text("em", "deep");
        inner.append_child(Node::text("er"));
        let mut outer = Element::new("p");
        outer.append_child(Node::text("the "));
        outer.append_child(inner);

        assert_eq!(outer.text_content(), "the deeper");
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut element = Element::new("div");
        element.set_attribute("class", "a");
        element.set_attribute("class", "b");
        assert_eq!(element.attribute("class"), Some("b"));
        assert_eq!(element.attributes().len(), 1);
    }
}
