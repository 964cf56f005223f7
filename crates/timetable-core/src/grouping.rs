//! Grouping of consecutive same-subject periods ("reprocessing").
//!
//! A double period often arrives from upstream as two rows; one grouping pass
//! collapses each such run into a single period spanning the combined range.
//! The pass trusts list order as chronological and does not re-sort first; use
//! the editor's auto-reorder to restore chronological order before grouping a
//! document whose lists are out of order.

use crate::error::Result;
use crate::model::{subjects_match, Period, TimetableDocument};
use crate::store::SnapshotStore;

/// Collapse runs of consecutive periods sharing a case-insensitive subject and
/// break flag, one day at a time, across the whole document.
///
/// Each merge extends the run's first period to the later end time and records
/// a human-readable change note. `period_number` values are left untouched;
/// callers needing dense numbering must renumber separately.
pub fn group_consecutive_periods(document: &mut TimetableDocument) -> Vec<String> {
    let mut changes = Vec::new();

    for day in &mut document.timetable {
        let mut grouped: Vec<Period> = Vec::with_capacity(day.periods.len());
        for period in day.periods.drain(..) {
            match grouped.last_mut() {
                Some(group)
                    if subjects_match(&group.subject, &period.subject)
                        && group.is_break == period.is_break =>
                {
                    let old_end = std::mem::replace(&mut group.end_time, period.end_time);
                    changes.push(format!(
                        "{}: Grouped consecutive '{}' periods (Period {} extended from {} to {})",
                        day.day, period.subject, group.period_number, old_end, group.end_time
                    ));
                }
                _ => grouped.push(period),
            }
        }
        day.periods = grouped;
    }

    changes
}

/// The reprocess flow: load the latest snapshot, group it, and save it back to
/// the same id.
///
/// `NotFound` when no snapshot exists (the caller should prompt for an upload
/// first), `Malformed` when the latest one will not parse, `Persistence` when
/// the write-back fails. Returns the change notes, empty if nothing merged.
pub fn reprocess_latest(store: &SnapshotStore) -> Result<Vec<String>> {
    let (id, mut document) = store.load_latest_strict()?;
    let changes = group_consecutive_periods(&mut document);
    store.save(&document, &id)?;
    Ok(changes)
}
