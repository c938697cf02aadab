//! Tabindex attribute parsing.

use kbnav_dom::collections::is_inherent_focus;
use kbnav_dom::Element;
use markup5ever::local_name;

/// The parsed state of an element's `tabindex` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tabindex {
    /// No `tabindex` attribute.
    Absent,
    /// The attribute is present but not an integer.
    Unparsable,
    /// The attribute's integer value.
    Value(i32),
}

pub(crate) fn explicit_tabindex(element: &Element) -> Tabindex {
    let Some(value) = element.attr(&local_name!("tabindex")) else {
        return Tabindex::Absent;
    };
    let value = value.trim();
    // numeric coercion maps an empty attribute to zero, not an error
    if value.is_empty() {
        return Tabindex::Value(0);
    }
    match value.parse() {
        Ok(value) => Tabindex::Value(value),
        Err(_) => Tabindex::Unparsable,
    }
}

/// Whether the element is content-editable: the attribute is present with
/// any value other than the literal string `"false"`.
pub(crate) fn is_content_editable(element: &Element) -> bool {
    element
        .attr(&local_name!("contenteditable"))
        .is_some_and(|value| &*value != "false")
}

/// Whether the element's tag would participate in the tab sequence without
/// an explicit `tabindex`: audio, video, details, or any content-editable
/// element.
pub(crate) fn has_inherent_focus(element: &Element) -> bool {
    element.local_name().is_some_and(|n| is_inherent_focus(&n)) || is_content_editable(element)
}

/// The tabindex value used for ordering an element already known to be
/// tabbable.
///
/// Absent and unparsable attributes both order as `0`; the predicate has
/// already excluded elements whose unparsable tabindex makes them
/// non-tabbable.
pub fn effective_tabindex(element: &Element) -> i32 {
    match explicit_tabindex(element) {
        Tabindex::Value(value) => value,
        Tabindex::Absent | Tabindex::Unparsable => 0,
    }
}
