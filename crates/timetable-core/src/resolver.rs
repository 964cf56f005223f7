//! Current and next class resolution.
//!
//! Pure queries over a document plus a caller-supplied instant; the clock is
//! always injected, never read here.

use chrono::{NaiveTime, Weekday};

use crate::model::{weekday_name, Period, TimetableDocument};

/// The answer to "what class is happening now, and what's next".
#[derive(Debug, Clone, Default)]
pub struct ClassContext {
    pub current: Option<Period>,
    pub next: Option<Period>,
}

/// Resolve the current and next period for the given weekday and time of day.
///
/// Periods are scanned in chronological order of parsed start time (stable, so
/// start-time ties keep list order); periods with unparsable times are skipped
/// entirely. A period is current while the instant falls in `[start, end)`, so
/// an empty interval is never current, though it can still be next.
pub fn current_and_next(
    document: &TimetableDocument,
    day: Weekday,
    at: NaiveTime,
) -> ClassContext {
    let Some(schedule) = document.day(weekday_name(day)) else {
        return ClassContext::default();
    };

    let mut timed: Vec<(&Period, NaiveTime, NaiveTime)> = schedule
        .periods
        .iter()
        .filter_map(|period| Some((period, period.start()?, period.end()?)))
        .collect();
    timed.sort_by_key(|(_, start, _)| *start);

    let mut current = None;
    let mut next = None;

    for (i, (period, start, end)) in timed.iter().enumerate() {
        if at >= *start && at < *end {
            current = Some((*period).clone());
            // The period after current in sorted order, if there is one
            next = timed.get(i + 1).map(|(p, _, _)| (*p).clone());
            break;
        }
        if at < *start && next.is_none() {
            next = Some((*period).clone());
        }
    }

    ClassContext { current, next }
}

/// True once the instant is at or past the latest parsable end time of the
/// day's periods (classes and breaks alike). False when the day is absent or
/// no end time parses.
pub fn after_last_period(document: &TimetableDocument, day: Weekday, at: NaiveTime) -> bool {
    let Some(schedule) = document.day(weekday_name(day)) else {
        return false;
    };
    match schedule.periods.iter().filter_map(|p| p.end()).max() {
        Some(last_end) => at >= last_end,
        None => false,
    }
}
