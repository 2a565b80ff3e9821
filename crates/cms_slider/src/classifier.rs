//! Base class tags inherited by every generated group.
//!
//! Generated groups must look like the group the author styled, so they pick up
//! the classes of the template group, the original items wrapper and the items
//! container. Host-framework classes and positional tags left by an earlier
//! rebuild are filtered out.

use html::{Dom, NodeId};

/// Sentinel carried by every generated group.
pub const GROUP_TAG: &str = "cltd-slide-group";
/// Marks an author-designated group element inside a template slide.
pub const GROUP_ATTR: &str = "data-cltd-slide-group";
/// Generic slide container class of the host widget.
pub const SLIDE_TAG: &str = "w-slide";
/// Host wrapper around the CMS items.
pub const ITEMS_WRAPPER_TAG: &str = "w-dyn-items";
/// Host class of one CMS item.
pub const ITEM_TAG: &str = "w-dyn-item";

const DYNAMIC_FAMILY_PREFIX: &str = "w-dyn";
const POSITIONAL_PREFIX: &str = "cltd-slide-group-";

/// `cltd-slide-group-<digits>`, compared ASCII-case-insensitively.
pub fn is_positional_tag(tag: &str) -> bool {
    let prefix_len = POSITIONAL_PREFIX.len();
    let Some(head) = tag.get(..prefix_len) else {
        return false;
    };
    let Some(digits) = tag.get(prefix_len..) else {
        return false;
    };
    head.eq_ignore_ascii_case(POSITIONAL_PREFIX)
        && !digits.is_empty()
        && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// `w-dyn` followed by the end of the tag or a non-word character.
pub fn is_dynamic_collection_tag(tag: &str) -> bool {
    tag.strip_prefix(DYNAMIC_FAMILY_PREFIX).is_some_and(|rest| {
        rest.chars()
            .next()
            .is_none_or(|next| !(next.is_ascii_alphanumeric() || next == '_'))
    })
}

/// Whether a generated group may inherit `tag`.
pub fn is_inheritable_tag(tag: &str) -> bool {
    tag != SLIDE_TAG && !is_positional_tag(tag) && !is_dynamic_collection_tag(tag)
}

/// The element inside `slide` that plays the role of the group.
///
/// First match wins: an explicit `data-cltd-slide-group` descendant, a
/// `.cltd-slide-group` descendant, a `.w-dyn-items` descendant, the first
/// element child, the slide itself.
pub fn find_group_element(dom: &Dom, slide: NodeId) -> NodeId {
    dom.first_descendant(slide, |dom, id| dom.has_attribute(id, GROUP_ATTR))
        .or_else(|| dom.first_descendant(slide, |dom, id| dom.has_class(id, GROUP_TAG)))
        .or_else(|| dom.first_descendant(slide, |dom, id| dom.has_class(id, ITEMS_WRAPPER_TAG)))
        .or_else(|| dom.first_element_child(slide))
        .unwrap_or(slide)
}

/// Compute the ordered, de-duplicated base tags, sentinel first.
pub fn compute_base_tags(
    dom: &Dom,
    template_group: Option<NodeId>,
    original_items_wrapper: Option<NodeId>,
    root_container: NodeId,
) -> Vec<String> {
    let mut tags = vec![GROUP_TAG.to_owned()];
    let sources = [template_group, original_items_wrapper, Some(root_container)];
    for source in sources.into_iter().flatten() {
        for tag in dom.classes(source).filter(|tag| is_inheritable_tag(tag)) {
            if !tags.iter().any(|existing| existing == tag) {
                tags.push(tag.to_owned());
            }
        }
    }
    tags
}
