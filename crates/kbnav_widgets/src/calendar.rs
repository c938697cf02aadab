//! A keyboard-navigable calendar: actions, keymap, and the focus reducer.
//!
//! Date arithmetic is delegated to a [`DateMath`] collaborator so the
//! controller stays agnostic of the host's date library.

use crate::key::{Key, KeyPress};

/// A calendar navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the focused date back one year.
    PreviousYear,
    /// Move the focused date forward one year.
    NextYear,
    /// Move the focused date back one month.
    PreviousMonth,
    /// Move the focused date forward one month.
    NextMonth,
    /// Move the focused date back one week.
    PreviousWeek,
    /// Move the focused date forward one week.
    NextWeek,
    /// Move the focused date back one day.
    PreviousDay,
    /// Move the focused date forward one day.
    NextDay,
    /// Move the focused date to the start of its week.
    StartOfWeek,
    /// Move the focused date to the end of its week.
    EndOfWeek,
}

impl Action {
    /// Maps a key press to its navigation action.
    ///
    /// Shift widens PageUp/PageDown from months to years; the arrows, Home,
    /// and End ignore the modifier. Unmapped presses yield [`None`].
    pub fn from_key(press: KeyPress) -> Option<Self> {
        match (press.key, press.shift) {
            (Key::PageUp, true) => Some(Self::PreviousYear),
            (Key::PageDown, true) => Some(Self::NextYear),
            (Key::PageUp, false) => Some(Self::PreviousMonth),
            (Key::PageDown, false) => Some(Self::NextMonth),
            (Key::ArrowUp, _) => Some(Self::PreviousWeek),
            (Key::ArrowDown, _) => Some(Self::NextWeek),
            (Key::ArrowLeft, _) => Some(Self::PreviousDay),
            (Key::ArrowRight, _) => Some(Self::NextDay),
            (Key::Home, _) => Some(Self::StartOfWeek),
            (Key::End, _) => Some(Self::EndOfWeek),
            (Key::Tab | Key::Escape, _) => None,
        }
    }
}

/// A calendar-unit span for date arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    /// Whole years.
    pub years: i32,
    /// Whole months.
    pub months: i32,
    /// Whole weeks.
    pub weeks: i32,
    /// Whole days.
    pub days: i32,
}

impl Span {
    /// A span of `n` years.
    pub fn years(n: i32) -> Self {
        Self {
            years: n,
            ..Self::default()
        }
    }

    /// A span of `n` months.
    pub fn months(n: i32) -> Self {
        Self {
            months: n,
            ..Self::default()
        }
    }

    /// A span of `n` weeks.
    pub fn weeks(n: i32) -> Self {
        Self {
            weeks: n,
            ..Self::default()
        }
    }

    /// A span of `n` days.
    pub fn days(n: i32) -> Self {
        Self {
            days: n,
            ..Self::default()
        }
    }
}

/// Date arithmetic the calendar delegates to the host.
///
/// Implementations decide what a date is, when weeks start, and how months
/// vary in length; the controller only composes these operations.
pub trait DateMath {
    /// The host's date type.
    type Date: Clone + PartialEq;

    /// Adds a span to a date.
    fn add(&self, date: &Self::Date, span: Span) -> Self::Date;

    /// Subtracts a span from a date.
    fn sub(&self, date: &Self::Date, span: Span) -> Self::Date;

    /// The first day of the date's week.
    fn start_of_week(&self, date: &Self::Date) -> Self::Date;

    /// The last day of the date's week.
    fn end_of_week(&self, date: &Self::Date) -> Self::Date;

    /// The first day of the date's month.
    fn start_of_month(&self, date: &Self::Date) -> Self::Date;

    /// The last day of the date's month.
    fn end_of_month(&self, date: &Self::Date) -> Self::Date;

    /// The date's weekday index, `0` for the first day of the week.
    fn weekday(&self, date: &Self::Date) -> usize;

    /// Formats a date for display or accessible labelling.
    fn format(&self, date: &Self::Date, pattern: &str) -> String;
}

/// The calendar's navigation state: a focused date and its reducer.
///
/// The state is an explicit handle passed to whatever consumes it; there
/// is no ambient registry, so a consumer without a state simply cannot be
/// constructed.
pub struct CalendarState<M: DateMath> {
    math: M,
    focus: M::Date,
}

impl<M: DateMath> CalendarState<M> {
    /// Creates a state focused on `initial`.
    pub fn new(math: M, initial: M::Date) -> Self {
        Self {
            math,
            focus: initial,
        }
    }

    /// The focused date.
    pub fn focus(&self) -> &M::Date {
        &self.focus
    }

    /// The date-arithmetic collaborator.
    pub fn math(&self) -> &M {
        &self.math
    }

    /// Applies a navigation action to the focused date.
    pub fn dispatch(&mut self, action: Action) {
        self.focus = match action {
            Action::PreviousYear => self.math.sub(&self.focus, Span::years(1)),
            Action::NextYear => self.math.add(&self.focus, Span::years(1)),
            Action::PreviousMonth => self.math.sub(&self.focus, Span::months(1)),
            Action::NextMonth => self.math.add(&self.focus, Span::months(1)),
            Action::PreviousWeek => self.math.sub(&self.focus, Span::weeks(1)),
            Action::NextWeek => self.math.add(&self.focus, Span::weeks(1)),
            Action::PreviousDay => self.math.sub(&self.focus, Span::days(1)),
            Action::NextDay => self.math.add(&self.focus, Span::days(1)),
            Action::StartOfWeek => self.math.start_of_week(&self.focus),
            Action::EndOfWeek => self.math.end_of_week(&self.focus),
        };
    }

    /// Handles a key press, returning whether it mapped to an action.
    pub fn handle_key(&mut self, press: KeyPress) -> bool {
        let Some(action) = Action::from_key(press) else {
            return false;
        };
        log::debug!("calendar action {action:?}");
        self.dispatch(action);
        true
    }
}
