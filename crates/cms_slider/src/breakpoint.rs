//! Responsive override of the configured group size.

use core::num::NonZeroUsize;

use crate::config::SliderConfig;

/// Maps a viewport width to the group size actually used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakpointResolver {
    /// Widest viewport (inclusive) that forces single-item groups.
    pub mobile_max_width: u32,
}

impl Default for BreakpointResolver {
    fn default() -> Self {
        Self::from_config(&SliderConfig::default())
    }
}

impl BreakpointResolver {
    pub fn from_config(config: &SliderConfig) -> Self {
        Self {
            mobile_max_width: config.mobile_breakpoint,
        }
    }

    /// Mobile widths always get one item per group; wider viewports get `configured`.
    pub fn effective_count(self, viewport_width: u32, configured: NonZeroUsize) -> NonZeroUsize {
        if viewport_width <= self.mobile_max_width {
            NonZeroUsize::MIN
        } else {
            configured
        }
    }
}

/// First non-zero of the window inner width and the document client width,
/// otherwise `fallback`.
pub fn resolve_viewport_width(inner: Option<u32>, client: Option<u32>, fallback: u32) -> u32 {
    inner
        .filter(|width| *width > 0)
        .or_else(|| client.filter(|width| *width > 0))
        .unwrap_or(fallback)
}
