//! One mounted slider.

use core::num::NonZeroUsize;
use std::time::Instant;

use anyhow::Error;
use html::{Dom, NodeId};
use log::debug;

use crate::breakpoint::BreakpointResolver;
use crate::classifier::{ITEM_TAG, ITEMS_WRAPPER_TAG, SLIDE_TAG, compute_base_tags, find_group_element};
use crate::config::{ITEMS_PER_SLIDE_ATTR, LayoutConfig, SLIDER_MASK_ATTR, SliderConfig};
use crate::host::SliderHost;
use crate::navigation::NavigationControls;
use crate::rebuild::{RebuildOutcome, RebuildPlan, SliderStructure, apply_plan, plan_rebuild};
use crate::resize::ResizeCoordinator;
use crate::template::SlideFactory;

/// Whether a rebuild may be skipped when nothing changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebuildMode {
    /// Always rebuild.
    Forced,
    /// Skip when the effective group size is unchanged and slides are present.
    IfChanged,
}

/// State captured once at mount for a `[data-cltd-slider="cms"]` root.
#[derive(Debug)]
pub struct CmsSlider {
    structure: SliderStructure,
    layout: LayoutConfig,
    base_tags: Vec<String>,
    breakpoints: BreakpointResolver,
    default_gap: String,
    region_label: String,
    last_rendered: Option<NonZeroUsize>,
    resize: ResizeCoordinator,
}

impl CmsSlider {
    /// Capture the slider rooted at `root`.
    ///
    /// Returns `None` when the root has no items container, no mask, or no
    /// items. Nothing in the tree is modified.
    pub fn capture(dom: &Dom, root: NodeId, config: &SliderConfig) -> Option<Self> {
        let Some(items_container) = dom.first_descendant(root, |dom, id| dom.has_attribute(id, ITEMS_PER_SLIDE_ATTR))
        else {
            debug!("slider {root:?}: no [{ITEMS_PER_SLIDE_ATTR}] container, skipping");
            return None;
        };
        let Some(mask) = dom.first_descendant(root, |dom, id| dom.has_attribute(id, SLIDER_MASK_ATTR)) else {
            debug!("slider {root:?}: no [{SLIDER_MASK_ATTR}] mask, skipping");
            return None;
        };
        let items = dom.descendants_with_class(items_container, ITEM_TAG);
        if items.is_empty() {
            debug!("slider {root:?}: no .{ITEM_TAG} items, skipping");
            return None;
        }

        let template = dom.first_descendant(mask, |dom, id| dom.has_class(id, SLIDE_TAG));
        let template_group = template.map(|slide| find_group_element(dom, slide));
        let items_wrapper = dom.first_descendant(items_container, |dom, id| dom.has_class(id, ITEMS_WRAPPER_TAG));
        let base_tags = compute_base_tags(dom, template_group, items_wrapper, items_container);

        Some(Self {
            structure: SliderStructure {
                root,
                items_container,
                mask,
                items,
                slide_factory: SlideFactory::capture(dom, template),
                navigation: NavigationControls::capture(dom, root),
            },
            layout: LayoutConfig::from_element(dom, items_container),
            base_tags,
            breakpoints: BreakpointResolver::from_config(config),
            default_gap: config.default_gap.clone(),
            region_label: config.region_label.clone(),
            last_rendered: None,
            resize: ResizeCoordinator::new(config.resize_debounce),
        })
    }

    pub fn root(&self) -> NodeId {
        self.structure.root
    }

    pub fn mask(&self) -> NodeId {
        self.structure.mask
    }

    /// Items in their original order.
    pub fn items(&self) -> &[NodeId] {
        &self.structure.items
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn base_tags(&self) -> &[String] {
        &self.base_tags
    }

    pub fn navigation(&self) -> &NavigationControls {
        &self.structure.navigation
    }

    /// Group size of the last completed rebuild.
    pub fn last_rendered(&self) -> Option<NonZeroUsize> {
        self.last_rendered
    }

    pub fn effective_count(&self, viewport_width: u32) -> NonZeroUsize {
        self.breakpoints
            .effective_count(viewport_width, self.layout.items_per_slide)
    }

    /// The plan a rebuild at `viewport_width` would apply.
    pub fn plan(&self, viewport_width: u32) -> RebuildPlan {
        plan_rebuild(
            self.structure.items.len(),
            self.effective_count(viewport_width),
            &self.layout,
            &self.base_tags,
            &self.default_gap,
        )
    }

    /// Regroup the items for `viewport_width`.
    ///
    /// # Errors
    /// Propagates [`apply_plan`] failures.
    pub fn rebuild(
        &mut self,
        dom: &mut Dom,
        viewport_width: u32,
        mode: RebuildMode,
        host: &mut dyn SliderHost,
    ) -> Result<RebuildOutcome, Error> {
        let group_size = self.effective_count(viewport_width);
        if mode == RebuildMode::IfChanged
            && self.last_rendered == Some(group_size)
            && dom
                .first_descendant(self.structure.mask, |dom, id| dom.has_class(id, SLIDE_TAG))
                .is_some()
        {
            debug!(
                "slider {:?}: {group_size} item(s) per slide unchanged at {viewport_width}px",
                self.structure.root
            );
            return Ok(RebuildOutcome::Skipped);
        }
        self.last_rendered = Some(group_size);

        let plan = self.plan(viewport_width);
        let slides = apply_plan(dom, &self.structure, &plan, &self.region_label, host)?;
        debug!(
            "slider {:?}: {} item(s) in {slides} slide(s) of {group_size} via {}",
            self.structure.root,
            self.structure.items.len(),
            host.name()
        );
        Ok(RebuildOutcome::Rebuilt { slides, group_size })
    }

    /// Schedule a debounced rebuild for a resize observed at `now`.
    pub fn on_resize(&mut self, viewport_width: u32, now: Instant) {
        self.resize.on_resize(viewport_width, now);
    }

    /// Run the debounced rebuild if its quiet period has elapsed at `now`.
    ///
    /// # Errors
    /// Propagates [`apply_plan`] failures.
    pub fn poll_resize(
        &mut self,
        dom: &mut Dom,
        now: Instant,
        host: &mut dyn SliderHost,
    ) -> Result<Option<RebuildOutcome>, Error> {
        let Some(width) = self.resize.poll(now) else {
            return Ok(None);
        };
        self.rebuild(dom, width, RebuildMode::IfChanged, host).map(Some)
    }

    pub fn next_resize_deadline(&self) -> Option<Instant> {
        self.resize.next_deadline()
    }
}
