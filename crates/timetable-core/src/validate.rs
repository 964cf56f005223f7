//! Whole-document validation, used as the pre-save gate.
//!
//! Every violation across the whole document is collected and reported
//! together, never short-circuited, so a user can fix everything in one pass.

use chrono::NaiveTime;

use crate::model::{Period, TimetableDocument};

/// Validate every period in every day.
///
/// Checks, per period: non-empty subject, parsable start and end times, and
/// start strictly before end. Per day, the parsable periods (sorted by start
/// time) must pairwise not overlap; adjacent touching periods are legal.
///
/// Returns the complete list of human-readable violations; empty means the
/// document is fit to save.
pub fn validate_document(document: &TimetableDocument) -> Vec<String> {
    let mut errors = Vec::new();

    for day in &document.timetable {
        for period in &day.periods {
            if period.subject.trim().is_empty() {
                errors.push(format!(
                    "{} - Period {}: Subject cannot be empty",
                    day.day, period.period_number
                ));
            }

            let start = period.start();
            let end = period.end();

            if start.is_none() {
                errors.push(format!(
                    "{} - Period {}: Invalid start time format (use HH:MM)",
                    day.day, period.period_number
                ));
            }
            if end.is_none() {
                errors.push(format!(
                    "{} - Period {}: Invalid end time format (use HH:MM)",
                    day.day, period.period_number
                ));
            }
            if let (Some(start), Some(end)) = (start, end) {
                if start >= end {
                    errors.push(format!(
                        "{} - Period {}: Start time must be before end time",
                        day.day, period.period_number
                    ));
                }
            }
        }

        let mut timed: Vec<(&Period, NaiveTime, NaiveTime)> = day
            .periods
            .iter()
            .filter_map(|period| Some((period, period.start()?, period.end()?)))
            .collect();
        timed.sort_by_key(|(_, start, _)| *start);

        for i in 0..timed.len() {
            for j in (i + 1)..timed.len() {
                let (a, a_start, a_end) = timed[i];
                let (b, b_start, b_end) = timed[j];
                // Overlap means the windows truly intersect; touching is fine
                if a_start < b_end && a_end > b_start {
                    errors.push(format!(
                        "{}: Period {} ({}-{}) overlaps Period {} ({}-{})",
                        day.day,
                        a.period_number,
                        a.start_time,
                        a.end_time,
                        b.period_number,
                        b.start_time,
                        b.end_time
                    ));
                }
            }
        }
    }

    errors
}
