//! Welcome banner
//!
//! Static banner shown at the top of the auction frontend: a heading and a
//! caption, tagged with a stable `data-test` hook for UI automation.

use auc_markup::{Element, Node};
use auc_style::ScopedClasses;

/// The welcome banner fragment
///
/// Borrows the scoped class mapping; [`render`](Welcome::render) looks up
/// the one logical name `"welcome"` and is otherwise a constant. If the
/// mapping has no entry for it the container renders without a class
/// attribute and the rest of the banner is unaffected.
pub struct Welcome<'a> {
    classes: &'a ScopedClasses,
}

impl<'a> Welcome<'a> {
    pub fn new(classes: &'a ScopedClasses) -> Self {
        Self { classes }
    }

    /// Render the banner
    ///
    /// Pure and synchronous; every call returns a fresh tree owned by the
    /// caller.
    pub fn render(&self) -> Node {
        let mut root = Element::new("div");
        root.set_attribute("data-test", "welcome");
        if let Some(class) = self.classes.resolve("welcome") {
            root.set_attribute("class", class);
        }

        root.append_child(Element::with_text("h1", "Auction"));
        root.append_child(Element::with_text("p", "In developing...33"));

        Node::Element(root)
    }
}
