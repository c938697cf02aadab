//! Collections of tag names with shared focus behaviour.

use std::collections::BTreeSet;

use markup5ever::LocalName;

lazy_static! {
    /// Form controls that participate in the tab sequence when enabled.
    pub static ref INTERACTIVE_CONTROLS: BTreeSet<&'static str> =
        BTreeSet::from(["button", "input", "select", "textarea"]);

    /// Tags that fall back to an effective tabindex of `0` when their
    /// `tabindex` attribute is absent or unparsable.
    pub static ref INHERENT_FOCUS: BTreeSet<&'static str> =
        BTreeSet::from(["audio", "details", "video"]);
}

/// Whether the tag is one of `button`, `input`, `select`, `textarea`.
pub fn is_interactive_control(name: &LocalName) -> bool {
    INTERACTIVE_CONTROLS.contains(name.as_ref())
}

/// Whether the tag defaults to focus participation without a `tabindex`.
pub fn is_inherent_focus(name: &LocalName) -> bool {
    INHERENT_FOCUS.contains(name.as_ref())
}

#[cfg(test)]
mod test {
    use markup5ever::local_name;

    use super::{is_inherent_focus, is_interactive_control};

    #[test]
    fn groups_do_not_overlap() {
        assert!(is_interactive_control(&local_name!("select")));
        assert!(!is_interactive_control(&local_name!("details")));
        assert!(is_inherent_focus(&local_name!("details")));
        assert!(!is_inherent_focus(&local_name!("button")));
    }
}
