//! Rebuilding the slide structure.
//!
//! A rebuild is split in two: [`plan_rebuild`] decides group boundaries, tags
//! and layouts as a plain value, and [`apply_plan`] moves the live nodes to
//! match it. Only `apply_plan` touches the tree.

use core::num::NonZeroUsize;
use core::ops::Range;

use anyhow::{Error, anyhow};
use html::{Dom, NodeId};
use log::trace;

use crate::classifier::{GROUP_TAG, SLIDE_TAG};
use crate::config::LayoutConfig;
use crate::host::SliderHost;
use crate::layout::GroupLayout;
use crate::navigation::NavigationControls;
use crate::partition::partition;
use crate::template::SlideFactory;

/// Nodes of one slider captured at mount. Never re-queried afterwards.
#[derive(Clone, Debug)]
pub struct SliderStructure {
    /// `[data-cltd-slider="cms"]` element.
    pub root: NodeId,
    /// `[data-cltd-items-per-slide]` element; detached on the first rebuild.
    pub items_container: NodeId,
    /// `[data-cltd-slider-mask]` element receiving the slides.
    pub mask: NodeId,
    /// CMS items in original order.
    pub items: Vec<NodeId>,
    pub slide_factory: SlideFactory,
    pub navigation: NavigationControls,
}

/// One slide of a plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlidePlan {
    /// 1-based position.
    pub index: usize,
    /// Indices into [`SliderStructure::items`].
    pub items: Range<usize>,
    /// Group classes: base tags followed by the positional tag.
    pub tags: Vec<String>,
    pub layout: GroupLayout,
}

impl SlidePlan {
    pub fn group_label(&self) -> String {
        format!("Slide group {}", self.index)
    }
}

/// Complete description of the structure a rebuild produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RebuildPlan {
    pub group_size: NonZeroUsize,
    pub slides: Vec<SlidePlan>,
}

impl RebuildPlan {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn hides_navigation(&self) -> bool {
        self.slides.len() <= 1
    }

    /// Item count of each group, in slide order.
    pub fn group_sizes(&self) -> Vec<usize> {
        self.slides.iter().map(|slide| slide.items.len()).collect()
    }
}

/// Result of a rebuild request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// Non-forced request with an unchanged group size and slides present.
    Skipped,
    Rebuilt {
        slides: usize,
        group_size: NonZeroUsize,
    },
}

impl RebuildOutcome {
    pub const fn is_rebuilt(self) -> bool {
        matches!(self, Self::Rebuilt { .. })
    }
}

/// Decide the slides for `item_count` items grouped by `group_size`.
pub fn plan_rebuild(
    item_count: usize,
    group_size: NonZeroUsize,
    layout: &LayoutConfig,
    base_tags: &[String],
    default_gap: &str,
) -> RebuildPlan {
    let slides = partition(item_count, group_size)
        .into_iter()
        .map(|group| {
            let positional = format!("{GROUP_TAG}-{}", group.index);
            let mut tags = base_tags.to_vec();
            if !tags.contains(&positional) {
                tags.push(positional);
            }
            SlidePlan {
                layout: GroupLayout::resolve(group_size, group.len(), layout, default_gap),
                index: group.index,
                items: group.range,
                tags,
            }
        })
        .collect();
    RebuildPlan { group_size, slides }
}

/// Replace the mask's content with the planned slides and refresh the host.
///
/// Returns the number of slides in the mask afterwards.
///
/// # Errors
/// Fails if a captured node was removed by someone else or the plan refers to
/// items that do not exist. The tree may be partially rebuilt in that case.
pub fn apply_plan(
    dom: &mut Dom,
    structure: &SliderStructure,
    plan: &RebuildPlan,
    region_label: &str,
    host: &mut dyn SliderHost,
) -> Result<usize, Error> {
    if !dom.is_alive(structure.mask) || !dom.is_alive(structure.root) {
        return Err(anyhow!("slider root or mask was removed from the document"));
    }

    // Items are detached first so clearing the mask cannot take them along.
    dom.detach(structure.items_container);
    for &item in &structure.items {
        dom.detach(item);
    }
    for child in dom.children(structure.mask) {
        dom.remove_subtree(child);
    }

    let mut slides = Vec::with_capacity(plan.slides.len());
    for slide_plan in &plan.slides {
        let members = structure
            .items
            .get(slide_plan.items.clone())
            .ok_or_else(|| anyhow!("slide {} refers to missing items {:?}", slide_plan.index, slide_plan.items))?;
        let slide = structure.slide_factory.create(dom)?;
        let group = dom.create_element("div");
        dom.set_attribute(group, "class", &slide_plan.tags.join(" "))?;
        dom.set_attribute(group, "role", "list")?;
        dom.set_attribute(group, "aria-label", &slide_plan.group_label())?;
        slide_plan.layout.apply(dom, group)?;
        for &item in members {
            dom.set_attribute(item, "role", "listitem")?;
            dom.append_child(group, item)?;
        }
        dom.append_child(slide, group)?;
        trace!("slide {}: {} item(s)", slide_plan.index, members.len());
        slides.push(slide);
    }
    for slide in slides {
        dom.append_child(structure.mask, slide)?;
    }

    let rendered = dom.descendants_with_class(structure.mask, SLIDE_TAG);
    structure.navigation.update_visibility(dom, rendered.len())?;

    dom.set_attribute(structure.root, "role", "region")?;
    dom.set_attribute(structure.root, "aria-label", region_label)?;
    for (position, &slide) in rendered.iter().enumerate() {
        dom.set_attribute(slide, "role", "group")?;
        dom.set_attribute(slide, "aria-label", &format!("Slide {}", position + 1))?;
    }

    host.redraw();
    Ok(rendered.len())
}
