#![allow(dead_code, reason = "Each test binary uses a different subset")]

use html::{Dom, NodeId};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A slider with a template slide, three navigation controls and `items` CMS items.
pub fn slider_markup(items: usize, per_slide: &str, container_attrs: &str) -> String {
    let cms_items: String = (1..=items)
        .map(|index| format!(r#"<div class="w-dyn-item card" id="item-{index}">Item {index}</div>"#))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html><body>
<div class="slider w-slider" id="slider" data-cltd-slider="cms">
  <div class="w-slider-mask" data-cltd-slider-mask>
    <div class="w-slide hero" id="template">
      <div class="cltd-slide-group cltd-slide-group-1 cards">placeholder</div>
    </div>
  </div>
  <div class="w-slider-arrow-left" style="display: flex"></div>
  <div class="w-slider-arrow-right"></div>
  <div class="w-slider-nav"></div>
  <div class="collection-list-wrapper w-dyn-list" id="list" data-cltd-items-per-slide="{per_slide}" {container_attrs}>
    <div class="w-dyn-items list">{cms_items}</div>
  </div>
</div>
</body></html>"#
    )
}

pub fn parse(markup: &str) -> Dom {
    Dom::parse_html(markup).unwrap()
}

pub fn by_id(dom: &Dom, id: &str) -> Option<NodeId> {
    dom.first_descendant(dom.root(), |dom, node| dom.attribute(node, "id") == Some(id))
}

pub fn by_class(dom: &Dom, class: &str) -> NodeId {
    dom.first_descendant(dom.root(), |dom, node| dom.has_class(node, class))
        .unwrap()
}

/// Item ids per slide, in mask order.
pub fn grouped_ids(dom: &Dom, mask: NodeId) -> Vec<Vec<String>> {
    dom.element_children(mask)
        .into_iter()
        .map(|slide| {
            let group = dom.first_element_child(slide).unwrap();
            dom.element_children(group)
                .into_iter()
                .map(|item| dom.attribute(item, "id").unwrap().to_owned())
                .collect()
        })
        .collect()
}

/// The single group element of every slide in the mask.
pub fn groups(dom: &Dom, mask: NodeId) -> Vec<NodeId> {
    dom.element_children(mask)
        .into_iter()
        .map(|slide| dom.first_element_child(slide).unwrap())
        .collect()
}

pub fn ids(range: core::ops::RangeInclusive<usize>) -> Vec<String> {
    range.map(|index| format!("item-{index}")).collect()
}
