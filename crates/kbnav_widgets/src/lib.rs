/*!
Keyboard-driven widget controllers built on the tabbable engine.

Three controllers cover the common accessible-widget patterns:

- [`FocusTrap`] cycles focus through a container's tabbable elements,
  recomputing the list on every step;
- [`Dialog`] wraps a trap with mandatory accessible labelling and Escape
  dismissal;
- [`CalendarState`] reduces the ten calendar navigation actions over a
  host-supplied [`DateMath`] collaborator, with [`month_grid`] laying the
  focused month out as weeks.

The controllers are headless: they decide where focus should go and when
callbacks fire, and leave rendering and actual focus movement to the host.
*/

pub mod calendar;
pub mod dialog;
pub mod focus_trap;
pub mod key;
pub mod month_grid;

pub use crate::calendar::{Action, CalendarState, DateMath, Span};
pub use crate::dialog::{Dialog, DialogError, DialogLabel, DialogOptions};
pub use crate::focus_trap::FocusTrap;
pub use crate::key::{Key, KeyPress};
pub use crate::month_grid::{month_grid, roving_tabindex, MonthGrid};
