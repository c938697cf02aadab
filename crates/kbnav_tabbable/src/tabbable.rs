//! The tab-order collector.

use std::collections::BTreeMap;

use kbnav_dom::Element;

use crate::is_tabbable::is_tabbable;
use crate::option::CheckOptions;
use crate::tabindex::effective_tabindex;

/// Collects the tabbable descendants of `root` in native tab order.
///
/// The subtree is walked depth-first in pre-order; `root` itself is never
/// part of the result. Rejected elements do not prune their subtree — a
/// non-tabbable wrapper can still contain tabbable children.
///
/// Ordering: elements with a positive tabindex come first, ascending by
/// value and in document order within a value; elements with tabindex zero
/// (explicit or implicit) follow in document order. This is a total
/// function: a detached or empty root yields an empty list.
pub fn tabbable(root: &Element, options: &CheckOptions) -> Vec<Element> {
    let mut zero_index = Vec::new();
    let mut positive_index: BTreeMap<i32, Vec<Element>> = BTreeMap::new();

    for element in root.descendants() {
        if !is_tabbable(&element, options) {
            continue;
        }
        match effective_tabindex(&element) {
            0 => zero_index.push(element),
            index => positive_index.entry(index).or_default().push(element),
        }
    }

    log::debug!(
        "collected {} tabbable elements ({} explicitly indexed)",
        zero_index.len() + positive_index.values().map(Vec::len).sum::<usize>(),
        positive_index.values().map(Vec::len).sum::<usize>(),
    );

    positive_index
        .into_values()
        .flatten()
        .chain(zero_index)
        .collect()
}
