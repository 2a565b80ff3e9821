//! Responsive regrouping of CMS collection items into carousel slides.
//!
//! A slider root (`[data-cltd-slider="cms"]`) holds a flat list of CMS items
//! and a carousel mask. On mount, and again whenever a debounced viewport
//! resize changes the effective group size, the items are moved into freshly
//! built slides of `N` items each, with a grid, flow or block layout per
//! group. Navigation controls are hidden when only one slide results.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

pub mod breakpoint;
pub mod classifier;
pub mod config;
/// Widget runtime seam
pub mod host;
pub mod instance;
pub mod layout;
pub mod navigation;
pub mod page;
pub mod partition;
pub mod rebuild;
/// Resize debouncing
pub mod resize;
/// Slide containers from the captured template
pub mod template;

pub use breakpoint::{BreakpointResolver, resolve_viewport_width};
pub use config::{LayoutConfig, SliderConfig};
pub use host::{NoopHost, RecordingHost, SliderHost};
pub use instance::{CmsSlider, RebuildMode};
pub use layout::GroupLayout;
pub use page::{SliderPage, discover};
pub use partition::{Partition, partition};
pub use rebuild::{RebuildOutcome, RebuildPlan, plan_rebuild};
pub use resize::ResizeCoordinator;
