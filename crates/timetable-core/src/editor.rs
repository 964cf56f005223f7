//! Interactive edit session over the latest snapshot.
//!
//! An [`EditSession`] wraps a loaded document in a mutable working copy with a
//! session-wide dirty flag. Every mutation validates its arguments; the full
//! document validation runs once, as the save gate. Discarding the session
//! (dropping it) loses all edits, which is the undo story by design.

use chrono::NaiveTime;

use crate::error::{Result, TimetableError};
use crate::model::{
    subjects_match, DaySchedule, Period, TimetableDocument, TimetableMetadata, WEEKDAY_NAMES,
};
use crate::store::SnapshotStore;
use crate::validate::validate_document;

/// Subject given to freshly added periods.
pub const DEFAULT_SUBJECT: &str = "New Period";
const DEFAULT_START_TIME: &str = "09:00";
const DEFAULT_END_TIME: &str = "10:00";

/// Field edits applied by [`EditSession::update_period`]; `None` leaves the
/// field untouched.
#[derive(Debug, Clone, Default)]
pub struct PeriodEdit {
    pub subject: Option<String>,
    pub teacher: Option<String>,
    pub room: Option<String>,
    pub is_break: Option<bool>,
}

/// An in-memory, validated working copy of one snapshot.
pub struct EditSession {
    snapshot_id: String,
    days: Vec<DaySchedule>,
    metadata: TimetableMetadata,
    dirty: bool,
}

impl EditSession {
    /// Open a session over the latest snapshot.
    ///
    /// `NotFound` when no snapshot exists and `Malformed` when the latest one
    /// will not parse; both are terminal for the session - there is nothing to
    /// edit.
    pub fn open(store: &SnapshotStore) -> Result<Self> {
        let (snapshot_id, document) = store.load_latest_strict()?;
        Ok(Self::from_document(snapshot_id, document))
    }

    fn from_document(snapshot_id: String, document: TimetableDocument) -> Self {
        // Hold days in canonical Monday..Sunday order; unrecognized day names
        // keep their document order at the tail so they survive a save.
        let mut days: Vec<DaySchedule> = Vec::with_capacity(document.timetable.len());
        for name in WEEKDAY_NAMES {
            if let Some(day) = document
                .timetable
                .iter()
                .find(|d| d.day.eq_ignore_ascii_case(name))
            {
                days.push(day.clone());
            }
        }
        for day in &document.timetable {
            if !WEEKDAY_NAMES.iter().any(|n| n.eq_ignore_ascii_case(&day.day)) {
                days.push(day.clone());
            }
        }
        Self {
            snapshot_id,
            days,
            metadata: document.metadata,
            dirty: false,
        }
    }

    /// The snapshot id the session was loaded from and will save back to.
    pub fn snapshot_id(&self) -> &str {
        &self.snapshot_id
    }

    /// True once any mutation has occurred; callers check this before
    /// discarding the session to prompt for confirmation.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Day names in session order.
    pub fn day_names(&self) -> Vec<&str> {
        self.days.iter().map(|d| d.day.as_str()).collect()
    }

    /// Read access to a day's working list.
    pub fn day(&self, day: &str) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day.eq_ignore_ascii_case(day))
    }

    /// Append a new period to the day with default subject and time window,
    /// numbered one past the day's highest existing number (1 when empty).
    /// Returns the assigned number.
    pub fn add_period(&mut self, day: &str) -> Result<i32> {
        let day = self.day_mut(day)?;
        let number = day
            .periods
            .iter()
            .map(|p| p.period_number)
            .max()
            .unwrap_or(0)
            + 1;
        day.periods.push(Period {
            period_number: number,
            subject: DEFAULT_SUBJECT.to_string(),
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            ..Default::default()
        });
        self.dirty = true;
        Ok(number)
    }

    /// Remove the period at `index` in the day's list order, returning it.
    pub fn delete_period(&mut self, day: &str, index: usize) -> Result<Period> {
        let day = self.day_mut(day)?;
        if index >= day.periods.len() {
            return Err(TimetableError::InvalidInput(format!(
                "no period at position {index}"
            )));
        }
        let removed = day.periods.remove(index);
        self.dirty = true;
        Ok(removed)
    }

    /// Relocate a period within its day's list, then renumber the whole day
    /// densely 1..N in list order.
    pub fn move_period(&mut self, day: &str, from: usize, to: usize) -> Result<()> {
        let day = self.day_mut(day)?;
        let count = day.periods.len();
        if from >= count || to >= count {
            return Err(TimetableError::InvalidInput(format!(
                "move {from} -> {to} is out of range for {count} period(s)"
            )));
        }
        let period = day.periods.remove(from);
        day.periods.insert(to, period);
        renumber_in_list_order(day);
        self.dirty = true;
        Ok(())
    }

    /// Sort the day by its existing period numbers and renumber 1..N - the
    /// manual "reorder" action. Returns the period count.
    pub fn renumber(&mut self, day: &str) -> Result<usize> {
        let day = self.day_mut(day)?;
        day.periods.sort_by_key(|p| p.period_number);
        renumber_in_list_order(day);
        let count = day.periods.len();
        self.dirty = true;
        Ok(count)
    }

    /// Stable-sort the day's periods by parsed start time and renumber 1..N.
    ///
    /// A half-typed, unparsable time sorts as midnight rather than erroring
    /// mid-edit; validation still rejects it at save.
    pub fn auto_reorder(&mut self, day: &str) -> Result<()> {
        let day = self.day_mut(day)?;
        day.periods
            .sort_by_key(|p| p.start().unwrap_or(NaiveTime::MIN));
        renumber_in_list_order(day);
        self.dirty = true;
        Ok(())
    }

    /// [`EditSession::auto_reorder`] across every day of the document.
    pub fn auto_reorder_all(&mut self) {
        for day in &mut self.days {
            day.periods
                .sort_by_key(|p| p.start().unwrap_or(NaiveTime::MIN));
            renumber_in_list_order(day);
        }
        self.dirty = true;
    }

    /// Update a period's time window, then auto-reorder that day - editing a
    /// time reorders as part of this operation's own contract.
    pub fn set_period_time(&mut self, day: &str, index: usize, start: &str, end: &str) -> Result<()> {
        {
            let period = self.period_mut(day, index)?;
            period.start_time = start.to_string();
            period.end_time = end.to_string();
        }
        self.auto_reorder(day)
    }

    /// Apply field edits to a period (subject/teacher/room/break flag).
    pub fn update_period(&mut self, day: &str, index: usize, edit: PeriodEdit) -> Result<()> {
        let period = self.period_mut(day, index)?;
        if let Some(subject) = edit.subject {
            period.subject = subject;
        }
        if let Some(teacher) = edit.teacher {
            period.teacher = teacher;
        }
        if let Some(room) = edit.room {
            period.room = room;
        }
        if let Some(is_break) = edit.is_break {
            period.is_break = is_break;
        }
        self.dirty = true;
        Ok(())
    }

    /// Case-insensitive exact-match subject replacement across every period of
    /// every day. Returns the replacement count; zero is a normal outcome.
    ///
    /// `find` must be non-empty. `replace` may be empty - it clears the
    /// subject, so callers should warn first; the save gate will then insist a
    /// real subject is filled in.
    pub fn find_replace_subject(&mut self, find: &str, replace: &str) -> Result<usize> {
        if find.trim().is_empty() {
            return Err(TimetableError::InvalidInput(
                "find text cannot be empty".to_string(),
            ));
        }
        let mut count = 0;
        for day in &mut self.days {
            for period in &mut day.periods {
                if subjects_match(&period.subject, find) {
                    period.subject = replace.to_string();
                    count += 1;
                }
            }
        }
        if count > 0 {
            self.dirty = true;
        }
        Ok(count)
    }

    /// Validate the whole working copy; see [`validate_document`]. Always
    /// recoverable - fix the inputs and try the save again.
    pub fn validate(&self) -> Vec<String> {
        validate_document(&self.to_document())
    }

    /// Snapshot the working copy as a document.
    pub fn to_document(&self) -> TimetableDocument {
        TimetableDocument {
            timetable: self.days.clone(),
            metadata: self.metadata.clone(),
        }
    }

    /// Validate, then write the working copy back to the snapshot id the
    /// session was opened from. Editing never creates a new snapshot file.
    ///
    /// `Validation` carries the full violation list; `NotFound` means the
    /// target file vanished since open, which is distinct from a validation
    /// failure; `Persistence` propagates write errors.
    pub fn save(&mut self, store: &SnapshotStore) -> Result<()> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(TimetableError::Validation(errors));
        }
        if !store.snapshot_path(&self.snapshot_id).exists() {
            return Err(TimetableError::NotFound(format!(
                "snapshot {} no longer exists to save to",
                self.snapshot_id
            )));
        }
        store.save(&self.to_document(), &self.snapshot_id)?;
        self.dirty = false;
        Ok(())
    }

    fn day_mut(&mut self, day: &str) -> Result<&mut DaySchedule> {
        self.days
            .iter_mut()
            .find(|d| d.day.eq_ignore_ascii_case(day))
            .ok_or_else(|| TimetableError::InvalidInput(format!("no such day: {day}")))
    }

    fn period_mut(&mut self, day: &str, index: usize) -> Result<&mut Period> {
        let day = self.day_mut(day)?;
        let count = day.periods.len();
        day.periods
            .get_mut(index)
            .ok_or_else(|| {
                TimetableError::InvalidInput(format!(
                    "no period at position {index} ({count} period(s) in day)"
                ))
            })
    }
}

fn renumber_in_list_order(day: &mut DaySchedule) {
    for (i, period) in day.periods.iter_mut().enumerate() {
        period.period_number = i as i32 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DaySchedule;

    fn period(number: i32, subject: &str, start: &str, end: &str) -> Period {
        Period {
            period_number: number,
            subject: subject.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..Default::default()
        }
    }

    fn session() -> EditSession {
        let document = TimetableDocument {
            timetable: vec![
                DaySchedule {
                    day: "Tuesday".to_string(),
                    periods: vec![period(1, "Science", "09:00", "09:50")],
                },
                DaySchedule {
                    day: "Monday".to_string(),
                    periods: vec![
                        period(1, "Maths", "09:00", "09:50"),
                        period(2, "English", "09:50", "10:40"),
                    ],
                },
            ],
            ..Default::default()
        };
        EditSession::from_document("2025-01-01-080000".to_string(), document)
    }

    #[test]
    fn days_come_out_in_weekday_order() {
        let session = session();
        assert_eq!(session.day_names(), vec!["Monday", "Tuesday"]);
        assert!(!session.is_dirty());
    }

    #[test]
    fn add_period_numbers_past_the_maximum() {
        let mut session = session();
        assert_eq!(session.add_period("Monday").unwrap(), 3);
        let day = session.day("Monday").unwrap();
        assert_eq!(day.periods[2].subject, DEFAULT_SUBJECT);
        assert_eq!(day.periods[2].start_time, "09:00");
        assert!(session.is_dirty());
    }

    #[test]
    fn add_period_to_unknown_day_is_invalid_input() {
        let mut session = session();
        assert!(matches!(
            session.add_period("Someday"),
            Err(TimetableError::InvalidInput(_))
        ));
        assert!(!session.is_dirty());
    }

    #[test]
    fn delete_period_removes_by_position() {
        let mut session = session();
        let removed = session.delete_period("Monday", 0).unwrap();
        assert_eq!(removed.subject, "Maths");
        assert_eq!(session.day("Monday").unwrap().periods.len(), 1);
        assert!(session.is_dirty());

        assert!(matches!(
            session.delete_period("Monday", 5),
            Err(TimetableError::InvalidInput(_))
        ));
    }

    #[test]
    fn move_period_renumbers_densely() {
        let mut session = session();
        session.move_period("Monday", 1, 0).unwrap();
        let day = session.day("Monday").unwrap();
        assert_eq!(day.periods[0].subject, "English");
        assert_eq!(day.periods[0].period_number, 1);
        assert_eq!(day.periods[1].subject, "Maths");
        assert_eq!(day.periods[1].period_number, 2);
    }

    #[test]
    fn set_period_time_triggers_auto_reorder() {
        let mut session = session();
        // Push Maths after English by giving it a later window
        session
            .set_period_time("Monday", 0, "11:00", "11:50")
            .unwrap();
        let day = session.day("Monday").unwrap();
        assert_eq!(day.periods[0].subject, "English");
        assert_eq!(day.periods[0].period_number, 1);
        assert_eq!(day.periods[1].subject, "Maths");
        assert_eq!(day.periods[1].period_number, 2);
    }

    #[test]
    fn auto_reorder_sorts_unparsable_times_first() {
        let mut session = session();
        session
            .update_period(
                "Monday",
                1,
                PeriodEdit {
                    subject: Some("Draft".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        session.set_period_time("Monday", 1, "", "10:40").unwrap();
        let day = session.day("Monday").unwrap();
        assert_eq!(day.periods[0].subject, "Draft");
    }

    #[test]
    fn find_replace_is_exact_and_case_insensitive() {
        let mut session = session();
        assert_eq!(session.find_replace_subject("maths", "Mathematics").unwrap(), 1);
        assert_eq!(session.day("Monday").unwrap().periods[0].subject, "Mathematics");

        // "Math" matches nothing exactly; document unchanged, not dirty beyond
        // the earlier edit
        assert_eq!(session.find_replace_subject("Math", "X").unwrap(), 0);
        assert_eq!(session.day("Monday").unwrap().periods[0].subject, "Mathematics");
    }

    #[test]
    fn zero_replacements_do_not_mark_dirty() {
        let mut session = session();
        assert_eq!(session.find_replace_subject("Latin", "Greek").unwrap(), 0);
        assert!(!session.is_dirty());
    }

    #[test]
    fn empty_find_text_is_rejected() {
        let mut session = session();
        assert!(matches!(
            session.find_replace_subject("  ", "X"),
            Err(TimetableError::InvalidInput(_))
        ));
    }

    #[test]
    fn replace_spans_every_day() {
        let mut session = session();
        session.add_period("Tuesday").unwrap();
        session.add_period("Monday").unwrap();
        assert_eq!(
            session.find_replace_subject(DEFAULT_SUBJECT, "Study").unwrap(),
            2
        );
    }

    #[test]
    fn save_gates_on_validation() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        store
            .save(&session().to_document(), "2025-01-01-080000")
            .unwrap();

        let mut session = EditSession::open(&store).unwrap();
        session
            .update_period(
                "Monday",
                0,
                PeriodEdit {
                    subject: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap();

        match session.save(&store) {
            Err(TimetableError::Validation(errors)) => {
                assert_eq!(errors, vec!["Monday - Period 1: Subject cannot be empty"]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        // Still dirty, still recoverable
        assert!(session.is_dirty());

        session
            .update_period(
                "Monday",
                0,
                PeriodEdit {
                    subject: Some("Maths".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        session.save(&store).unwrap();
        assert!(!session.is_dirty());
    }

    #[test]
    fn save_to_vanished_snapshot_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        store
            .save(&session().to_document(), "2025-01-01-080000")
            .unwrap();

        let mut session = EditSession::open(&store).unwrap();
        session.add_period("Monday").unwrap();
        std::fs::remove_file(store.snapshot_path("2025-01-01-080000")).unwrap();

        assert!(matches!(
            session.save(&store),
            Err(TimetableError::NotFound(_))
        ));
    }

    #[test]
    fn open_requires_a_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(dir.path());
        assert!(matches!(
            EditSession::open(&store),
            Err(TimetableError::NotFound(_))
        ));
    }
}
