//! The keyboard input model shared by the widget controllers.

/// A named key, as reported by the host's event source.
///
/// Only the keys the controllers react to are modelled; anything else is
/// the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The Tab key.
    Tab,
    /// The Escape key.
    Escape,
    /// The up arrow.
    ArrowUp,
    /// The down arrow.
    ArrowDown,
    /// The left arrow.
    ArrowLeft,
    /// The right arrow.
    ArrowRight,
    /// The Page Up key.
    PageUp,
    /// The Page Down key.
    PageDown,
    /// The Home key.
    Home,
    /// The End key.
    End,
}

/// A key press together with its Shift modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The pressed key.
    pub key: Key,
    /// Whether Shift was held.
    pub shift: bool,
}

impl KeyPress {
    /// A press of `key` without Shift.
    pub fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }

    /// A press of `key` with Shift held.
    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}
