//! Inline-style probing for the display check.
//!
//! The engine runs without a layout pass, so "has rendered boxes" and
//! "computed visibility" degrade to what the markup itself can answer: the
//! `hidden` attribute and `display`/`visibility` declarations in `style`
//! attributes. Environments with no styling information at all should turn
//! the display check off instead.

use markup5ever::local_name;

use crate::element::Element;

/// Returns the value of a property declared in the element's `style`
/// attribute, if any.
pub fn style_property(element: &Element, property: &str) -> Option<String> {
    let style = element.attr(&local_name!("style"))?;
    style.split(';').find_map(|declaration| {
        let (name, value) = declaration.split_once(':')?;
        if name.trim().eq_ignore_ascii_case(property) {
            Some(value.trim().to_ascii_lowercase())
        } else {
            None
        }
    })
}

fn display_none(element: &Element) -> bool {
    element.has_attr(&local_name!("hidden"))
        || style_property(element, "display").is_some_and(|v| v == "none")
}

/// Whether the element generates any rendered boxes.
///
/// An ancestor that is `display: none` (or `hidden`) collapses every
/// descendant's boxes too, which matches the zero-client-rects behaviour
/// the check stands in for.
pub fn has_rendered_box(element: &Element) -> bool {
    !std::iter::once(element.clone())
        .chain(element.ancestors())
        .any(|e| display_none(&e))
}

/// Whether the element's computed visibility is `hidden`.
///
/// Visibility inherits but can be reset; the nearest declaration on the
/// element or an ancestor wins.
pub fn visibility_hidden(element: &Element) -> bool {
    std::iter::once(element.clone())
        .chain(element.ancestors())
        .find_map(|e| style_property(&e, "visibility"))
        .is_some_and(|v| v == "hidden")
}
