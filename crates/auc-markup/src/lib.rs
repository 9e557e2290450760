//! Auction UI Markup
//!
//! Engine-agnostic markup tree for UI fragments.
//! Trees are plain owned data: built by ordinary functions, compared
//! structurally, serialized to HTML when a string is needed.

mod attributes;
mod node;
mod serialize;

pub use attributes::{Attribute, AttributeList};
pub use node::{Element, Node};
pub use serialize::{HtmlSerializer, outer_html};
