//! Previous/next arrows and indicator dots of the host widget.

use anyhow::Error;
use html::{Dom, NodeId};
use log::trace;

use crate::config::HIDDEN_MARKER_ATTR;

/// Classes identifying navigation controls under a slider root.
pub const NAVIGATION_TAGS: [&str; 3] = ["w-slider-arrow-left", "w-slider-arrow-right", "w-slider-nav"];

/// A navigation element and the inline `display` it had at mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationControl {
    pub node: NodeId,
    pub original_display: Option<String>,
}

/// All navigation controls of one slider, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationControls {
    controls: Vec<NavigationControl>,
}

impl NavigationControls {
    pub fn capture(dom: &Dom, slider_root: NodeId) -> Self {
        let controls = dom
            .descendants_matching(slider_root, |dom, id| {
                NAVIGATION_TAGS.iter().any(|tag| dom.has_class(id, tag))
            })
            .into_iter()
            .map(|node| NavigationControl {
                node,
                original_display: dom.style_property(node, "display"),
            })
            .collect();
        Self { controls }
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, NavigationControl> {
        self.controls.iter()
    }

    /// Hide every control when there is at most one slide, restore them otherwise.
    ///
    /// Controls no longer in the arena are skipped.
    ///
    /// # Errors
    /// Propagates attribute errors from the DOM.
    pub fn update_visibility(&self, dom: &mut Dom, slide_count: usize) -> Result<(), Error> {
        let hide = slide_count <= 1;
        for control in &self.controls {
            if !dom.is_alive(control.node) {
                continue;
            }
            if hide {
                dom.set_style_property(control.node, "display", Some("none"))?;
                dom.set_attribute(control.node, HIDDEN_MARKER_ATTR, "true")?;
            } else {
                dom.set_style_property(control.node, "display", control.original_display.as_deref())?;
                dom.remove_attribute(control.node, HIDDEN_MARKER_ATTR)?;
            }
        }
        trace!(
            "navigation: {} control(s) {} for {slide_count} slide(s)",
            self.controls.len(),
            if hide { "hidden" } else { "shown" }
        );
        Ok(())
    }
}
