//! Engine configuration and the per-slider layout configuration read from markup.
//!
//! [`SliderConfig`] holds the engine-wide constants (breakpoint, debounce,
//! default gap) and can be loaded from environment variables. [`LayoutConfig`]
//! is read once from the items container's `data-cltd-*` attributes.

use core::num::NonZeroUsize;
use core::time::Duration;
use html::{Dom, NodeId};
use std::env;

/// `[data-cltd-slider="cms"]` marks a slider root.
pub const SLIDER_ATTR: &str = "data-cltd-slider";
pub const SLIDER_KIND: &str = "cms";
/// Marks the items container and carries the desired group size.
pub const ITEMS_PER_SLIDE_ATTR: &str = "data-cltd-items-per-slide";
/// Marks the container receiving generated slides.
pub const SLIDER_MASK_ATTR: &str = "data-cltd-slider-mask";
pub const GAP_ATTR: &str = "data-cltd-slide-gap";
pub const COLUMN_GAP_ATTR: &str = "data-cltd-slide-column-gap";
pub const ROW_GAP_ATTR: &str = "data-cltd-slide-row-gap";
pub const SINGLE_LAYOUT_ATTR: &str = "data-cltd-slide-single-layout";
pub const LAYOUT_ATTR: &str = "data-cltd-layout";
pub const ALIGN_ATTR: &str = "data-cltd-align";
/// Set on navigation controls hidden because there is at most one slide.
pub const HIDDEN_MARKER_ATTR: &str = "data-cltd-slider-hidden";

/// Engine-wide settings shared by every slider instance on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliderConfig {
    /// Widest viewport (inclusive, px) still treated as mobile.
    pub mobile_breakpoint: u32,
    /// Quiet period after the last resize before a rebuild runs.
    pub resize_debounce: Duration,
    /// Gap used by grid and flow groups when the markup declares none.
    pub default_gap: String,
    /// Width assumed when the host reports no usable viewport width.
    pub default_viewport_width: u32,
    /// Accessible name of every slider root.
    pub region_label: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 767,
            resize_debounce: Duration::from_millis(150),
            default_gap: String::from("1.5rem"),
            default_viewport_width: 1024,
            region_label: String::from("CMS Slider"),
        }
    }
}

impl SliderConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `CMS_SLIDER_MOBILE_BREAKPOINT`: mobile breakpoint in px (default: 767)
    /// - `CMS_SLIDER_RESIZE_DEBOUNCE_MS`: resize quiet period in ms (default: 150)
    /// - `CMS_SLIDER_DEFAULT_GAP`: default group gap (default: `1.5rem`)
    ///
    /// Missing or unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let mobile_breakpoint = env::var("CMS_SLIDER_MOBILE_BREAKPOINT")
            .ok()
            .and_then(|val| val.trim().parse::<u32>().ok())
            .unwrap_or(defaults.mobile_breakpoint);
        let resize_debounce = env::var("CMS_SLIDER_RESIZE_DEBOUNCE_MS")
            .ok()
            .and_then(|val| val.trim().parse::<u64>().ok())
            .map_or(defaults.resize_debounce, Duration::from_millis);
        let default_gap = env::var("CMS_SLIDER_DEFAULT_GAP")
            .ok()
            .map(|val| val.trim().to_owned())
            .filter(|val| !val.is_empty())
            .unwrap_or(defaults.default_gap);
        Self {
            mobile_breakpoint,
            resize_debounce,
            default_gap,
            ..defaults
        }
    }
}

/// Group arrangement selected by `data-cltd-layout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Grid when a group has several columns, block otherwise.
    #[default]
    Auto,
    /// Wrapping flex row regardless of column count.
    Flow,
}

impl LayoutMode {
    /// `flow` and `flex` select the wrapping flow; anything else is automatic.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("flow") || value.eq_ignore_ascii_case("flex") {
            Self::Flow
        } else {
            Self::Auto
        }
    }
}

/// Alignment keyword from `data-cltd-align`.
///
/// Synonyms are kept apart because block groups only honor `center` and
/// `right`, while flow groups treat each pair alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlignKeyword {
    Left,
    Start,
    Center,
    Middle,
    Right,
    End,
}

impl AlignKeyword {
    /// Case-insensitive; unknown keywords yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let keyword = value.trim().to_ascii_lowercase();
        match keyword.as_str() {
            "left" => Some(Self::Left),
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "middle" => Some(Self::Middle),
            "right" => Some(Self::Right),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

/// Declarative layout settings of one slider, immutable after mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Desired items per group on non-mobile viewports.
    pub items_per_slide: NonZeroUsize,
    pub gap: Option<String>,
    pub column_gap: Option<String>,
    pub row_gap: Option<String>,
    /// `display` keyword for single-column groups; `block` when absent.
    pub single_layout: Option<String>,
    pub mode: LayoutMode,
    pub align: Option<AlignKeyword>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            items_per_slide: NonZeroUsize::MIN,
            gap: None,
            column_gap: None,
            row_gap: None,
            single_layout: None,
            mode: LayoutMode::Auto,
            align: None,
        }
    }
}

impl LayoutConfig {
    /// Read the configuration attributes of the items container.
    pub fn from_element(dom: &Dom, items_container: NodeId) -> Self {
        let read = |name: &str| {
            dom.attribute(items_container, name)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        };
        Self {
            items_per_slide: dom
                .attribute(items_container, ITEMS_PER_SLIDE_ATTR)
                .and_then(parse_positive_int)
                .unwrap_or(NonZeroUsize::MIN),
            gap: read(GAP_ATTR),
            column_gap: read(COLUMN_GAP_ATTR),
            row_gap: read(ROW_GAP_ATTR),
            single_layout: read(SINGLE_LAYOUT_ATTR),
            mode: read(LAYOUT_ATTR)
                .as_deref()
                .map_or(LayoutMode::Auto, LayoutMode::parse),
            align: read(ALIGN_ATTR).as_deref().and_then(AlignKeyword::parse),
        }
    }
}

/// Integer prefix parse in the manner of `parseInt(value, 10)`, keeping only positive results.
///
/// Leading ASCII whitespace and one sign are accepted, trailing garbage is
/// ignored (`"3px"` is 3, `"2.5"` is 2).
pub fn parse_positive_int(value: &str) -> Option<NonZeroUsize> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..)?),
        Some(b'+') => (false, trimmed.get(1..)?),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|character: char| !character.is_ascii_digit())
        .unwrap_or(digits.len());
    let number = digits.get(..end)?;
    if negative || number.is_empty() {
        return None;
    }
    // Overflowing values are still positive; saturate instead of rejecting.
    let parsed = number.parse::<usize>().unwrap_or(usize::MAX);
    NonZeroUsize::new(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_int_follows_prefix_parsing() {
        let parse = |value: &str| parse_positive_int(value).map(NonZeroUsize::get);
        assert_eq!(parse("3"), Some(3));
        assert_eq!(parse("  4 "), Some(4));
        assert_eq!(parse("3px"), Some(3));
        assert_eq!(parse("2.5"), Some(2));
        assert_eq!(parse("+2"), Some(2));
        assert_eq!(parse("0"), None);
        assert_eq!(parse("-1"), None);
        assert_eq!(parse("abc"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("99999999999999999999999"), Some(usize::MAX));
    }

    #[test]
    fn alignment_and_mode_keywords() {
        assert_eq!(AlignKeyword::parse("CENTER"), Some(AlignKeyword::Center));
        assert_eq!(AlignKeyword::parse(" End "), Some(AlignKeyword::End));
        assert_eq!(AlignKeyword::parse("justify"), None);
        assert_eq!(LayoutMode::parse("flex"), LayoutMode::Flow);
        assert_eq!(LayoutMode::parse("Flow"), LayoutMode::Flow);
        assert_eq!(LayoutMode::parse("grid"), LayoutMode::Auto);
    }

    #[test]
    fn layout_config_reads_data_attributes() {
        let dom = Dom::parse_html(
            r#"<div id="list" data-cltd-items-per-slide="x" data-cltd-slide-gap=" 2rem "
                data-cltd-slide-row-gap="" data-cltd-layout="flex" data-cltd-align="Right"></div>"#,
        )
        .unwrap();
        let list = dom
            .first_descendant(dom.root(), |dom, id| dom.attribute(id, "id") == Some("list"))
            .unwrap();
        let config = LayoutConfig::from_element(&dom, list);
        assert_eq!(config.items_per_slide.get(), 1);
        assert_eq!(config.gap.as_deref(), Some("2rem"));
        assert_eq!(config.row_gap, None);
        assert_eq!(config.column_gap, None);
        assert_eq!(config.mode, LayoutMode::Flow);
        assert_eq!(config.align, Some(AlignKeyword::Right));
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = SliderConfig::default();
        assert_eq!(config.mobile_breakpoint, 767);
        assert_eq!(config.resize_debounce, Duration::from_millis(150));
        assert_eq!(config.default_gap, "1.5rem");
    }
}
