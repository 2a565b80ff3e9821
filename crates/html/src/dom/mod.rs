//! Arena-backed DOM: node data, tree queries and class/attribute lookups.

use indextree::{Arena, Node, NodeId};
use smallvec::SmallVec;

pub mod printing;
pub mod updating;

/// Attribute list of an element, in source order.
pub type Attributes = SmallVec<(String, String), 4>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NodeKind {
    #[default]
    Document,
    Element {
        tag: String,
    },
    Text {
        text: String,
    },
    Comment {
        text: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub kind: NodeKind,
    pub attrs: Attributes,
}

impl DomNode {
    /// A fresh element with no attributes. Tag names are stored lowercase.
    pub fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
            },
            attrs: Attributes::new(),
        }
    }

    pub fn text(text: &str) -> Self {
        Self {
            kind: NodeKind::Text {
                text: text.to_owned(),
            },
            attrs: Attributes::new(),
        }
    }

    /// Tag name for element nodes.
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag } => Some(tag),
            _ => None,
        }
    }

    /// Attribute value, matched ASCII-case-insensitively as HTML does.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A document tree. Nodes detached from the document stay alive in the arena
/// until their subtree is explicitly removed.
pub struct Dom {
    pub(crate) arena: Arena<DomNode>,
    pub(crate) root: NodeId,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    /// Create an empty document.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(DomNode::default());
        Self { arena, root }
    }

    /// The document node.
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Whether `id` still refers to a live node of this arena.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some() && !id.is_removed(&self.arena)
    }

    /// Whether `id` is alive and attached under the document node.
    pub fn is_in_tree(&self, id: NodeId) -> bool {
        self.is_alive(id) && id.ancestors(&self.arena).any(|ancestor| ancestor == self.root)
    }

    pub fn node(&self, id: NodeId) -> Option<&DomNode> {
        if !self.is_alive(id) {
            return None;
        }
        self.arena.get(id).map(Node::get)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(DomNode::tag)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.tag(id).is_some()
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).and_then(|node| node.attr(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Class tokens of an element in attribute order.
    pub fn classes(&self, id: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.attribute(id, "class")
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).any(|token| token == class)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        id.parent(&self.arena)
    }

    /// Direct children, including text and comment nodes.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        if !self.is_alive(id) {
            return Vec::new();
        }
        id.children(&self.arena).collect()
    }

    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .into_iter()
            .filter(|child| self.is_element(*child))
            .collect()
    }

    pub fn first_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.element_children(id).into_iter().next()
    }

    /// Descendants of `id` (excluding `id` itself) matching `predicate`, in document order.
    pub fn descendants_matching<F>(&self, id: NodeId, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Self, NodeId) -> bool,
    {
        if !self.is_alive(id) {
            return Vec::new();
        }
        id.descendants(&self.arena)
            .skip(1)
            .filter(|candidate| predicate(self, *candidate))
            .collect()
    }

    /// First descendant of `id` matching `predicate`, like `querySelector`.
    pub fn first_descendant<F>(&self, id: NodeId, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Self, NodeId) -> bool,
    {
        if !self.is_alive(id) {
            return None;
        }
        id.descendants(&self.arena)
            .skip(1)
            .find(|candidate| predicate(self, *candidate))
    }

    /// Elements under `id` carrying the class token `class`.
    pub fn descendants_with_class(&self, id: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants_matching(id, |dom, candidate| dom.has_class(candidate, class))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if !self.is_alive(id) {
            return out;
        }
        for descendant in id.descendants(&self.arena) {
            if let Some(DomNode {
                kind: NodeKind::Text { text },
                ..
            }) = self.node(descendant)
            {
                out.push_str(text);
            }
        }
        out
    }
}
