//! The focusability predicate.

use kbnav_dom::collections::is_interactive_control;
use kbnav_dom::style::{has_rendered_box, visibility_hidden};
use kbnav_dom::Element;
use markup5ever::local_name;

use crate::option::CheckOptions;
use crate::tabindex::{explicit_tabindex, has_inherent_focus, is_content_editable, Tabindex};

/// Whether the element is currently part of the native Tab sequence.
///
/// The rule chain below mirrors the platform's tabbing-order model; the
/// order is load-bearing (an explicit negative `tabindex` must win over any
/// tag default, a closed `details` must hide everything but its first
/// summary) and must not be rearranged.
pub fn is_tabbable(element: &Element, options: &CheckOptions) -> bool {
    if element.has_attr(&local_name!("disabled")) {
        return false;
    }

    if options.display_check {
        if !has_rendered_box(element) {
            return false;
        }
        if visibility_hidden(element) {
            return false;
        }
    }

    match explicit_tabindex(element) {
        Tabindex::Value(value) => return value >= 0,
        // an unparsable tabindex behaves as 0 only for tags with inherent
        // focus; every other tag is excluded outright
        Tabindex::Unparsable => return has_inherent_focus(element),
        Tabindex::Absent => {}
    }

    if is_content_editable(element) {
        return true;
    }

    if is_first_summary_of_details(element) {
        return true;
    }

    if parent_is_closed_details(element) {
        return false;
    }

    if element.is(&local_name!("details")) && !has_summary_child(element) {
        return true;
    }

    if (element.is(&local_name!("audio")) || element.is(&local_name!("video")))
        && element.has_attr(&local_name!("controls"))
    {
        return true;
    }

    if element.is(&local_name!("a")) && element.has_attr(&local_name!("href")) {
        return true;
    }

    if let Some(tabbable) = first_legend_carve_out(element) {
        return tabbable;
    }

    let enabled = disabled_fieldset_ancestor(element).is_none();

    if element.is(&local_name!("button")) {
        return enabled;
    }

    if is_radio(element) {
        return enabled && radio_tabbable(element);
    }

    if let Some(name) = element.local_name() {
        if is_interactive_control(&name) {
            return enabled;
        }
    }

    false
}

fn has_summary_child(details: &Element) -> bool {
    details.children().any(|c| c.is(&local_name!("summary")))
}

/// Rule: a `summary` is tabbable when it is the first summary child of its
/// parent `details` in document order.
fn is_first_summary_of_details(element: &Element) -> bool {
    if !element.is(&local_name!("summary")) {
        return false;
    }
    let Some(parent) = element.parent() else {
        return false;
    };
    parent.is(&local_name!("details"))
        && parent
            .children()
            .find(|c| c.is(&local_name!("summary")))
            .is_some_and(|first| first.ptr_eq(element))
}

fn parent_is_closed_details(element: &Element) -> bool {
    element
        .parent()
        .is_some_and(|p| p.is(&local_name!("details")) && !p.has_attr(&local_name!("open")))
}

fn is_disabled_fieldset(element: &Element) -> bool {
    element.is(&local_name!("fieldset")) && element.has_attr(&local_name!("disabled"))
}

/// The nearest strict ancestor that is a `fieldset[disabled]`.
fn disabled_fieldset_ancestor(element: &Element) -> Option<Element> {
    element.ancestors().find(is_disabled_fieldset)
}

/// The first legend of a disabled fieldset stays interactive: a control
/// descending from a `legend` that is the first element child of a
/// `fieldset[disabled]` is tabbable, unless its nearest disabled fieldset
/// is itself wrapped by another disabled fieldset.
///
/// Returns [`None`] when the carve-out doesn't apply and the regular
/// fieldset-disabling rules should decide.
fn first_legend_carve_out(element: &Element) -> Option<bool> {
    let name = element.local_name()?;
    if !is_interactive_control(&name) {
        return None;
    }
    let in_first_legend = element.ancestors().any(|ancestor| {
        ancestor.is(&local_name!("legend"))
            && ancestor.parent().is_some_and(|fieldset| {
                is_disabled_fieldset(&fieldset)
                    && fieldset
                        .first_element_child()
                        .is_some_and(|first| first.ptr_eq(&ancestor))
            })
    });
    if !in_first_legend {
        return None;
    }
    let nearest = disabled_fieldset_ancestor(element)?;
    Some(disabled_fieldset_ancestor(&nearest).is_none())
}

fn is_radio(element: &Element) -> bool {
    element.is(&local_name!("input"))
        && element
            .attr(&local_name!("type"))
            .is_some_and(|t| t.eq_ignore_ascii_case("radio"))
}

fn is_checked_radio_named(element: &Element, name: &str) -> bool {
    is_radio(element)
        && element.has_attr(&local_name!("checked"))
        && element
            .attr(&local_name!("name"))
            .is_some_and(|n| &*n == name)
}

/// Radio-group membership: an unscoped radio (no `name`) is always
/// tabbable; a named radio is tabbable when it is the checked member of
/// its group, or when no member is checked.
fn radio_tabbable(element: &Element) -> bool {
    let Some(name) = element.attr(&local_name!("name")) else {
        return true;
    };
    if name.is_empty() {
        return true;
    }

    // a radio is never a form itself, so this resolves to the nearest
    // ancestor form
    let checked = match element.closest(&local_name!("form")) {
        Some(form) => form
            .descendants()
            .find(|e| is_checked_radio_named(e, &name)),
        None => {
            // free-floating radios group across the whole tree, excluding
            // any input that belongs to a form
            let root = element.scope_root();
            std::iter::once(root.clone())
                .chain(root.descendants())
                .find(|e| {
                    is_checked_radio_named(e, &name)
                        && !e.ancestors().any(|a| a.is(&local_name!("form")))
                })
        }
    };

    match checked {
        Some(checked) => checked.ptr_eq(element),
        None => true,
    }
}
