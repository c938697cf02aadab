//! The month grid rendered by a calendar.

use crate::calendar::{CalendarState, DateMath, Span};

/// A month laid out as weeks of seven cells.
///
/// Leading and trailing cells outside the month are [`None`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid<D> {
    /// The rows of the grid, each exactly seven cells.
    pub weeks: Vec<Vec<Option<D>>>,
}

/// Builds the grid for the month of the state's focused date.
///
/// The first row is front-padded with blanks up to the first day's weekday
/// and the last row is back-padded to a full week.
pub fn month_grid<M: DateMath>(state: &CalendarState<M>) -> MonthGrid<M::Date> {
    let math = state.math();
    let start = math.start_of_month(state.focus());
    let end = math.end_of_month(state.focus());

    let mut cells: Vec<Option<M::Date>> = vec![None; math.weekday(&start)];
    let mut day = start;
    loop {
        let last = day == end;
        cells.push(Some(day.clone()));
        if last {
            break;
        }
        day = math.add(&day, Span::days(1));
    }
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    MonthGrid {
        weeks: cells.chunks(7).map(<[Option<M::Date>]>::to_vec).collect(),
    }
}

/// The tabindex for a rendered day cell under a roving-tabindex scheme:
/// `0` for the focused day, `-1` for every other day.
pub fn roving_tabindex<D: PartialEq>(day: &D, focus: &D) -> i32 {
    if day == focus {
        0
    } else {
        -1
    }
}
