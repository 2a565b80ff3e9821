//! Layout decision for one generated group.
//!
//! The decision is a plain value ([`GroupLayout`]) so it can be compared and
//! tested without a tree; [`GroupLayout::declarations`] renders it as the inline
//! declarations written on the group element.

use core::num::NonZeroUsize;

use anyhow::Error;
use css_style_attr::StyleDeclarations;
use html::{Dom, NodeId};

use crate::config::{AlignKeyword, LayoutConfig, LayoutMode};

/// Main-axis distribution (`justify-content`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JustifyContent {
    FlexStart,
    Center,
    FlexEnd,
}

impl JustifyContent {
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::Center => "center",
            Self::FlexEnd => "flex-end",
        }
    }
}

/// Cross-axis alignment (`align-items`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlignItems {
    Stretch,
    Center,
}

impl AlignItems {
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Center => "center",
        }
    }
}

/// Gap sizing shared by grid and flow groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gaps {
    pub gap: String,
    pub column_gap: Option<String>,
    pub row_gap: Option<String>,
}

impl Gaps {
    fn from_config(config: &LayoutConfig, default_gap: &str) -> Self {
        Self {
            gap: config.gap.clone().unwrap_or_else(|| default_gap.to_owned()),
            column_gap: config.column_gap.clone(),
            row_gap: config.row_gap.clone(),
        }
    }

    fn write(&self, style: &mut StyleDeclarations) {
        style.set("gap", &self.gap);
        style.set("column-gap", self.column_gap.as_deref().unwrap_or_default());
        style.set("row-gap", self.row_gap.as_deref().unwrap_or_default());
    }
}

/// Concrete arrangement assigned to a group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupLayout {
    /// Wrapping flex row.
    Flow {
        gaps: Gaps,
        justify: JustifyContent,
        align_items: AlignItems,
    },
    /// Equal-width column grid.
    Grid { columns: NonZeroUsize, gaps: Gaps },
    /// Single column using the configured display keyword.
    Block {
        display: String,
        justify: Option<JustifyContent>,
    },
}

impl GroupLayout {
    /// Decide the layout of a group targeted at `target` items that actually holds `actual`.
    pub fn resolve(
        target: NonZeroUsize,
        actual: usize,
        config: &LayoutConfig,
        default_gap: &str,
    ) -> Self {
        let columns = column_count(target, actual);
        if config.mode == LayoutMode::Flow {
            return Self::Flow {
                gaps: Gaps::from_config(config, default_gap),
                justify: flow_justify(config.align),
                align_items: flow_align_items(config.align),
            };
        }
        if target.get() > 1 && columns.get() > 1 {
            return Self::Grid {
                columns,
                gaps: Gaps::from_config(config, default_gap),
            };
        }
        Self::Block {
            display: config
                .single_layout
                .clone()
                .unwrap_or_else(|| String::from("block")),
            justify: block_justify(config.align),
        }
    }

    /// Number of equal tracks for grids, one otherwise.
    pub fn columns(&self) -> usize {
        match self {
            Self::Grid { columns, .. } => columns.get(),
            Self::Flow { .. } | Self::Block { .. } => 1,
        }
    }

    /// Replace the inline style of `group` with this layout.
    ///
    /// # Errors
    /// Fails if `group` is not a live element.
    pub fn apply(&self, dom: &mut Dom, group: NodeId) -> Result<(), Error> {
        dom.set_inline_style(group, &self.declarations())
    }

    /// Serialized `style` attribute value.
    pub fn style_attribute(&self) -> String {
        self.declarations().to_string()
    }

    /// Inline declarations in assignment order.
    pub fn declarations(&self) -> StyleDeclarations {
        let mut style = StyleDeclarations::default();
        match self {
            Self::Flow {
                gaps,
                justify,
                align_items,
            } => {
                style.set("display", "flex");
                style.set("flex-wrap", "wrap");
                gaps.write(&mut style);
                style.set("justify-content", justify.as_css());
                style.set("align-items", align_items.as_css());
            }
            Self::Grid { columns, gaps } => {
                style.set("display", "grid");
                style.set(
                    "grid-template-columns",
                    &format!("repeat({columns}, minmax(0, 1fr))"),
                );
                gaps.write(&mut style);
            }
            Self::Block { display, justify } => {
                style.set("display", display);
                if let Some(justify) = justify {
                    style.set("justify-content", justify.as_css());
                }
            }
        }
        style
    }
}

/// `clamp(actual || target, 1, target)`.
pub fn column_count(target: NonZeroUsize, actual: usize) -> NonZeroUsize {
    let wanted = if actual == 0 { target.get() } else { actual };
    NonZeroUsize::new(wanted.min(target.get())).unwrap_or(NonZeroUsize::MIN)
}

fn flow_justify(align: Option<AlignKeyword>) -> JustifyContent {
    match align {
        Some(AlignKeyword::Left | AlignKeyword::Start) => JustifyContent::FlexStart,
        Some(AlignKeyword::Right | AlignKeyword::End) => JustifyContent::FlexEnd,
        Some(AlignKeyword::Center | AlignKeyword::Middle) | None => JustifyContent::Center,
    }
}

// Centering replaces stretch only for center/middle; every other keyword stretches.
fn flow_align_items(align: Option<AlignKeyword>) -> AlignItems {
    match align {
        Some(AlignKeyword::Center | AlignKeyword::Middle) => AlignItems::Center,
        _ => AlignItems::Stretch,
    }
}

fn block_justify(align: Option<AlignKeyword>) -> Option<JustifyContent> {
    match align {
        Some(AlignKeyword::Center) => Some(JustifyContent::Center),
        Some(AlignKeyword::Right) => Some(JustifyContent::FlexEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    fn config_with(mode: LayoutMode, align: Option<AlignKeyword>) -> LayoutConfig {
        LayoutConfig {
            mode,
            align,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn columns_are_clamped_to_target() {
        assert_eq!(column_count(count(3), 3), count(3));
        assert_eq!(column_count(count(3), 1), count(1));
        assert_eq!(column_count(count(3), 0), count(3));
        assert_eq!(column_count(count(3), 9), count(3));
    }

    #[test]
    fn full_group_gets_grid_and_short_last_group_still_grids() {
        let config = LayoutConfig::default();
        let full = GroupLayout::resolve(count(3), 3, &config, "1.5rem");
        assert_eq!(
            full.style_attribute(),
            "display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 1.5rem;"
        );
        let partial = GroupLayout::resolve(count(3), 2, &config, "1.5rem");
        assert_eq!(partial.columns(), 2);
    }

    #[test]
    fn single_item_groups_fall_back_to_block() {
        let config = LayoutConfig {
            single_layout: Some(String::from("flex")),
            align: Some(AlignKeyword::Right),
            ..LayoutConfig::default()
        };
        let last = GroupLayout::resolve(count(3), 1, &config, "1.5rem");
        assert_eq!(last.style_attribute(), "display: flex; justify-content: flex-end;");
        let mobile = GroupLayout::resolve(count(1), 1, &LayoutConfig::default(), "1.5rem");
        assert_eq!(mobile.style_attribute(), "display: block;");
    }

    #[test]
    fn block_justify_only_honors_center_and_right() {
        for (keyword, expected) in [
            (AlignKeyword::Center, Some(JustifyContent::Center)),
            (AlignKeyword::Right, Some(JustifyContent::FlexEnd)),
            (AlignKeyword::Middle, None),
            (AlignKeyword::End, None),
            (AlignKeyword::Left, None),
        ] {
            let layout =
                GroupLayout::resolve(count(1), 1, &config_with(LayoutMode::Auto, Some(keyword)), "0");
            assert_eq!(
                layout,
                GroupLayout::Block {
                    display: String::from("block"),
                    justify: expected
                }
            );
        }
    }

    #[test]
    fn flow_alignment_table() {
        let cases = [
            (None, JustifyContent::Center, AlignItems::Stretch),
            (Some(AlignKeyword::Left), JustifyContent::FlexStart, AlignItems::Stretch),
            (Some(AlignKeyword::Start), JustifyContent::FlexStart, AlignItems::Stretch),
            (Some(AlignKeyword::Middle), JustifyContent::Center, AlignItems::Center),
            (Some(AlignKeyword::Center), JustifyContent::Center, AlignItems::Center),
            (Some(AlignKeyword::End), JustifyContent::FlexEnd, AlignItems::Stretch),
        ];
        for (align, justify, align_items) in cases {
            let layout = GroupLayout::resolve(count(1), 1, &config_with(LayoutMode::Flow, align), "1rem");
            assert_eq!(
                layout,
                GroupLayout::Flow {
                    gaps: Gaps {
                        gap: String::from("1rem"),
                        column_gap: None,
                        row_gap: None
                    },
                    justify,
                    align_items
                }
            );
        }
    }

    #[test]
    fn flow_writes_independent_gaps() {
        let config = LayoutConfig {
            mode: LayoutMode::Flow,
            gap: Some(String::from("2rem")),
            column_gap: Some(String::from("8px")),
            row_gap: Some(String::from("4px")),
            ..LayoutConfig::default()
        };
        let layout = GroupLayout::resolve(count(4), 4, &config, "1.5rem");
        assert_eq!(
            layout.style_attribute(),
            "display: flex; flex-wrap: wrap; gap: 2rem; column-gap: 8px; row-gap: 4px; \
             justify-content: center; align-items: stretch;"
        );
    }
}
