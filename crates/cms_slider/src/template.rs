//! Slide containers built from the captured template.

use anyhow::Error;
use html::{Attributes, Dom, NodeId};

use crate::classifier::SLIDE_TAG;

/// Creates empty slide containers.
///
/// The template slide's tag and attributes are captured once at mount; its
/// children are not. The `id` attribute is never copied so generated slides
/// cannot collide with each other or the template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideFactory {
    tag: String,
    attrs: Attributes,
}

impl Default for SlideFactory {
    /// A bare `<div class="w-slide">`.
    fn default() -> Self {
        let mut attrs = Attributes::new();
        attrs.push((String::from("class"), String::from(SLIDE_TAG)));
        Self {
            tag: String::from("div"),
            attrs,
        }
    }
}

impl SlideFactory {
    /// Capture `template` if present, otherwise the bare fallback.
    pub fn capture(dom: &Dom, template: Option<NodeId>) -> Self {
        let Some(node) = template.and_then(|id| dom.node(id)) else {
            return Self::default();
        };
        let Some(tag) = node.tag() else {
            return Self::default();
        };
        let attrs = node
            .attrs
            .iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case("id"))
            .cloned()
            .collect();
        Self {
            tag: tag.to_owned(),
            attrs,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// A new detached, childless slide.
    ///
    /// # Errors
    /// Propagates attribute errors from the DOM (not expected for fresh nodes).
    pub fn create(&self, dom: &mut Dom) -> Result<NodeId, Error> {
        let slide = dom.create_element(&self.tag);
        for (name, value) in &self.attrs {
            dom.set_attribute(slide, name, value)?;
        }
        Ok(slide)
    }
}
