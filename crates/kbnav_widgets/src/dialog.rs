//! A modal dialog controller.

use kbnav_dom::Element;
use kbnav_tabbable::CheckOptions;

use crate::focus_trap::FocusTrap;
use crate::key::{Key, KeyPress};

/// An error from constructing a [`Dialog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// Neither a labelled-by reference nor an explicit label was supplied.
    MissingLabel,
}

impl std::fmt::Display for DialogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLabel => f.write_str(
                "dialog needs either a reference to a visible title or an explicit label",
            ),
        }
    }
}

impl std::error::Error for DialogError {}

/// The accessible name of a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogLabel {
    /// The id of a visible element that titles the dialog.
    LabelledBy(String),
    /// An explicit label string.
    Label(String),
}

/// Construction parameters for a [`Dialog`].
#[derive(Default)]
pub struct DialogOptions {
    /// Id of a visible element that titles the dialog. Takes precedence
    /// over [`label`](Self::label) when both are given.
    pub labelled_by: Option<String>,
    /// An explicit label string, for dialogs without a visible title.
    pub label: Option<String>,
    /// The element to focus when the dialog opens, instead of the first
    /// tabbable descendant.
    pub initial_focus: Option<Element>,
    /// Options forwarded to the tabbable checks.
    pub check: CheckOptions,
}

/// A modal dialog: a focus trap over its root plus Escape dismissal.
///
/// Every dialog must be accessibly named, so construction fails with
/// [`DialogError::MissingLabel`] unless the options carry a labelled-by
/// reference or an explicit label. The controller never renders anything;
/// it decides where focus goes and when the dismissal callback fires.
pub struct Dialog {
    trap: FocusTrap,
    label: DialogLabel,
    initial_focus: Option<Element>,
    on_dismiss: Option<Box<dyn FnMut()>>,
}

impl Dialog {
    /// Creates a dialog rooted at `root`.
    ///
    /// # Errors
    /// [`DialogError::MissingLabel`] when the options name no accessible
    /// label.
    pub fn new(root: Element, options: DialogOptions) -> Result<Self, DialogError> {
        let label = match (options.labelled_by, options.label) {
            (Some(id), _) => DialogLabel::LabelledBy(id),
            (None, Some(label)) => DialogLabel::Label(label),
            (None, None) => return Err(DialogError::MissingLabel),
        };
        Ok(Self {
            trap: FocusTrap::new(root, options.check),
            label,
            initial_focus: options.initial_focus,
            on_dismiss: None,
        })
    }

    /// Registers the callback invoked when the dialog is dismissed.
    pub fn on_dismiss(&mut self, callback: impl FnMut() + 'static) {
        self.on_dismiss = Some(Box::new(callback));
    }

    /// The dialog's accessible name.
    pub fn label(&self) -> &DialogLabel {
        &self.label
    }

    /// Returns the element to focus when the dialog opens: the configured
    /// initial-focus element, else the trap's choice.
    pub fn open(&mut self) -> Option<Element> {
        self.trap.activate(self.initial_focus.clone())
    }

    /// Records that focus moved inside the dialog without the controller's
    /// involvement.
    pub fn set_focused(&mut self, element: Element) {
        self.trap.set_focused(element);
    }

    /// Handles a key press, returning the element focus should move to.
    ///
    /// Tab advances and Shift+Tab retreats through the trap; Escape fires
    /// the dismissal callback and leaves focus alone; everything else is
    /// ignored.
    pub fn handle_key(&mut self, press: KeyPress) -> Option<Element> {
        match press.key {
            Key::Tab if press.shift => self.trap.previous(),
            Key::Tab => self.trap.next(),
            Key::Escape => {
                log::debug!("dialog dismissed via Escape");
                if let Some(callback) = &mut self.on_dismiss {
                    callback();
                }
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;
    use std::rc::Rc;

    use kbnav_dom::parse::parse;
    use kbnav_dom::Element;
    use markup5ever::local_name;
    use pretty_assertions::assert_eq;

    use crate::dialog::{Dialog, DialogError, DialogLabel, DialogOptions};
    use crate::key::{Key, KeyPress};

    const DIALOG: &str = r#"<div id="dialog">
        <h2 id="title">Settings</h2>
        <input id="name">
        <button id="save">save</button>
        <button id="cancel">cancel</button>
    </div>"#;

    fn id(element: &Element) -> String {
        element.attr(&local_name!("id")).unwrap().to_string()
    }

    #[test]
    fn requires_an_accessible_label() {
        let document = parse(DIALOG).unwrap();
        let root = document.get_element_by_id("dialog").unwrap();
        let err = Dialog::new(root, DialogOptions::default()).err().unwrap();
        assert_eq!(err, DialogError::MissingLabel);
    }

    #[test]
    fn labelled_by_takes_precedence() {
        let document = parse(DIALOG).unwrap();
        let root = document.get_element_by_id("dialog").unwrap();
        let dialog = Dialog::new(
            root,
            DialogOptions {
                labelled_by: Some("title".into()),
                label: Some("Settings".into()),
                ..DialogOptions::default()
            },
        )
        .unwrap();
        assert_eq!(*dialog.label(), DialogLabel::LabelledBy("title".into()));
    }

    #[test]
    fn open_honours_the_initial_focus_element() {
        let document = parse(DIALOG).unwrap();
        let root = document.get_element_by_id("dialog").unwrap();
        let mut dialog = Dialog::new(
            root,
            DialogOptions {
                label: Some("Settings".into()),
                initial_focus: document.get_element_by_id("cancel"),
                ..DialogOptions::default()
            },
        )
        .unwrap();
        assert_eq!(id(&dialog.open().unwrap()), "cancel");
    }

    #[test]
    fn tab_cycles_and_shift_tab_reverses() {
        let document = parse(DIALOG).unwrap();
        let root = document.get_element_by_id("dialog").unwrap();
        let mut dialog = Dialog::new(
            root,
            DialogOptions {
                label: Some("Settings".into()),
                ..DialogOptions::default()
            },
        )
        .unwrap();
        assert_eq!(id(&dialog.open().unwrap()), "name");
        assert_eq!(id(&dialog.handle_key(KeyPress::plain(Key::Tab)).unwrap()), "save");
        assert_eq!(id(&dialog.handle_key(KeyPress::plain(Key::Tab)).unwrap()), "cancel");
        assert_eq!(id(&dialog.handle_key(KeyPress::plain(Key::Tab)).unwrap()), "name");
        assert_eq!(
            id(&dialog.handle_key(KeyPress::shifted(Key::Tab)).unwrap()),
            "cancel"
        );
    }

    #[test]
    fn escape_fires_the_dismissal_callback_without_moving_focus() {
        let document = parse(DIALOG).unwrap();
        let root = document.get_element_by_id("dialog").unwrap();
        let mut dialog = Dialog::new(
            root,
            DialogOptions {
                label: Some("Settings".into()),
                ..DialogOptions::default()
            },
        )
        .unwrap();
        let dismissed = Rc::new(Cell::new(false));
        let flag = dismissed.clone();
        dialog.on_dismiss(move || flag.set(true));
        dialog.open();
        assert!(dialog.handle_key(KeyPress::plain(Key::Escape)).is_none());
        assert!(dismissed.get());
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let document = parse(DIALOG).unwrap();
        let root = document.get_element_by_id("dialog").unwrap();
        let mut dialog = Dialog::new(
            root,
            DialogOptions {
                label: Some("Settings".into()),
                ..DialogOptions::default()
            },
        )
        .unwrap();
        dialog.open();
        assert!(dialog.handle_key(KeyPress::plain(Key::ArrowDown)).is_none());
    }
}
