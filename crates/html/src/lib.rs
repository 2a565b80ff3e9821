//! In-memory HTML document tree used by the slider engine.
//!
//! Documents are parsed with html5ever and stored in an indextree arena so that
//! nodes keep a stable [`NodeId`] while being moved between parents.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

pub mod dom;
pub mod parser;

pub use dom::{Attributes, Dom, DomNode, NodeKind};
pub use indextree::NodeId;
pub use parser::parse_html;
