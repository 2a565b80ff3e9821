//! Structural and attribute mutation of the arena DOM.
//!
//! Every mutation addressing a node validates it first; a removed node or an
//! attempt to create a cycle is reported as an error rather than a panic.

use super::{Dom, DomNode, NodeKind};
use anyhow::{Error, anyhow};
use css_style_attr::StyleDeclarations;
use indextree::NodeId;

impl Dom {
    /// Create a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.new_node(DomNode::element(tag))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.arena.new_node(DomNode::text(text))
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.arena.new_node(DomNode {
            kind: NodeKind::Comment {
                text: text.to_owned(),
            },
            ..DomNode::default()
        })
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut DomNode, Error> {
        if !self.is_alive(id) {
            return Err(anyhow!("node {id:?} was removed from the document"));
        }
        let node = self
            .arena
            .get_mut(id)
            .ok_or_else(|| anyhow!("node {id:?} does not belong to this document"))?
            .get_mut();
        if !matches!(node.kind, NodeKind::Element { .. }) {
            return Err(anyhow!("node {id:?} is not an element"));
        }
        Ok(node)
    }

    /// Set or replace an attribute, keeping its original position.
    ///
    /// # Errors
    /// Returns an error if `id` is not a live element.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), Error> {
        let node = self.element_mut(id)?;
        if let Some((_, existing)) = node
            .attrs
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            value.clone_into(existing);
        } else {
            node.attrs.push((name.to_ascii_lowercase(), value.to_owned()));
        }
        Ok(())
    }

    /// Remove an attribute. Returns whether it was present.
    ///
    /// # Errors
    /// Returns an error if `id` is not a live element.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<bool, Error> {
        let node = self.element_mut(id)?;
        let before = node.attrs.len();
        node.attrs.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        Ok(before != node.attrs.len())
    }

    /// Move `child` (with its subtree) to the end of `parent`'s children.
    ///
    /// # Errors
    /// Returns an error if either node was removed or `child` is an ancestor of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        if !self.is_alive(parent) || !self.is_alive(child) {
            return Err(anyhow!(
                "cannot append {child:?} to {parent:?}: node was removed"
            ));
        }
        if parent.ancestors(&self.arena).any(|ancestor| ancestor == child) {
            return Err(anyhow!(
                "cannot append {child:?} to {parent:?}: it is an ancestor"
            ));
        }
        child.detach(&mut self.arena);
        parent
            .checked_append(child, &mut self.arena)
            .map_err(|err| anyhow!("cannot append {child:?} to {parent:?}: {err}"))
    }

    /// Unlink `id` from its parent and siblings. The subtree stays alive.
    pub fn detach(&mut self, id: NodeId) {
        if self.is_alive(id) && id != self.root {
            id.detach(&mut self.arena);
        }
    }

    /// Drop `id` and all its descendants from the arena.
    pub fn remove_subtree(&mut self, id: NodeId) {
        if self.is_alive(id) && id != self.root {
            id.remove_subtree(&mut self.arena);
        }
    }

    /// Parsed inline style of an element. Non-elements yield an empty block.
    pub fn inline_style(&self, id: NodeId) -> StyleDeclarations {
        StyleDeclarations::parse(self.attribute(id, "style").unwrap_or_default())
    }

    /// One inline style property, like `element.style.<property>`.
    pub fn style_property(&self, id: NodeId, property: &str) -> Option<String> {
        self.inline_style(id).get(property).map(str::to_owned)
    }

    /// Replace the whole inline style. An empty block removes the attribute.
    ///
    /// # Errors
    /// Returns an error if `id` is not a live element.
    pub fn set_inline_style(&mut self, id: NodeId, style: &StyleDeclarations) -> Result<(), Error> {
        if style.is_empty() {
            self.remove_attribute(id, "style")?;
            return Ok(());
        }
        self.set_attribute(id, "style", &style.to_string())
    }

    /// Assign one inline style property; `None` or an empty value clears it.
    ///
    /// # Errors
    /// Returns an error if `id` is not a live element.
    pub fn set_style_property(
        &mut self,
        id: NodeId,
        property: &str,
        value: Option<&str>,
    ) -> Result<(), Error> {
        let mut style = self.inline_style(id);
        style.set(property, value.unwrap_or_default());
        self.set_inline_style(id, &style)
    }
}
