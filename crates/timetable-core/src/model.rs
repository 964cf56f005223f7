//! The schedule data model.
//!
//! These types mirror the snapshot JSON format field-for-field. Every field
//! defaults (empty string / zero / false), so a partial or hand-edited document
//! still loads; bad time text surfaces later, as a validation error.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// The seven weekday names, in canonical display order.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One persisted timetable snapshot: a week of named days plus metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableDocument {
    /// Days that have defined periods; order is a display default only
    pub timetable: Vec<DaySchedule>,

    /// Free-form descriptive fields, passed through untouched
    pub metadata: TimetableMetadata,
}

/// One day's ordered list of periods.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DaySchedule {
    /// Weekday name ("Monday".."Sunday"), matched case-insensitively
    pub day: String,

    /// Periods in list order; chronological order is re-derived where it matters
    pub periods: Vec<Period>,
}

/// One scheduled block of time within a day (a class or a break).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Period {
    /// Intended dense 1..N chronological numbering; only guaranteed after a
    /// reorder or renumber operation has run
    pub period_number: i32,

    pub subject: String,
    pub teacher: String,
    pub room: String,

    /// Wall-clock time of day as text, `HH:MM` 24-hour
    pub start_time: String,
    pub end_time: String,

    /// Breaks group by this flag plus subject, never by subject alone
    pub is_break: bool,
}

/// Descriptive snapshot metadata; the core enforces no invariants here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimetableMetadata {
    pub school_name: String,
    pub term: String,
    pub year: i32,
    pub valid_from: String,
    pub valid_to: String,
}

impl TimetableDocument {
    /// Look up a day by name, case-insensitively.
    pub fn day(&self, name: &str) -> Option<&DaySchedule> {
        self.timetable
            .iter()
            .find(|d| d.day.eq_ignore_ascii_case(name))
    }

    /// Mutable variant of [`TimetableDocument::day`].
    pub fn day_mut(&mut self, name: &str) -> Option<&mut DaySchedule> {
        self.timetable
            .iter_mut()
            .find(|d| d.day.eq_ignore_ascii_case(name))
    }
}

impl Period {
    /// Parsed start time, or `None` if the text is not a valid time of day.
    pub fn start(&self) -> Option<NaiveTime> {
        parse_time(&self.start_time)
    }

    /// Parsed end time, or `None` if the text is not a valid time of day.
    pub fn end(&self) -> Option<NaiveTime> {
        parse_time(&self.end_time)
    }
}

/// Parse `HH:MM` (24-hour) time-of-day text; a seconds suffix is tolerated.
pub fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()
}

/// Display name for a weekday ("Monday".."Sunday").
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// Resolve user-supplied text to a canonical weekday name.
pub fn normalize_day_name(text: &str) -> Option<&'static str> {
    let text = text.trim();
    WEEKDAY_NAMES
        .iter()
        .find(|name| name.eq_ignore_ascii_case(text))
        .copied()
}

/// Resolve user-supplied text to a [`Weekday`].
pub fn weekday_from_name(text: &str) -> Option<Weekday> {
    const WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];
    let text = text.trim();
    WEEKDAY_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(text))
        .map(|i| WEEKDAYS[i])
}

/// Case-insensitive subject comparison, as the grouping and find/replace
/// operations define a match.
pub fn subjects_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn parse_time_accepts_hh_mm() {
        assert_eq!(
            parse_time("09:00"),
            NaiveTime::from_hms_opt(9, 0, 0)
        );
        assert_eq!(parse_time(" 13:45 "), NaiveTime::from_hms_opt(13, 45, 0));
        assert_eq!(parse_time("9:05"), NaiveTime::from_hms_opt(9, 5, 0));
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("9am"), None);
        assert_eq!(parse_time("09-00"), None);
    }

    #[test]
    fn weekday_names_line_up() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn normalize_day_name_is_case_insensitive() {
        assert_eq!(normalize_day_name("monday"), Some("Monday"));
        assert_eq!(normalize_day_name("  FRIDAY  "), Some("Friday"));
        assert_eq!(normalize_day_name("Funday"), None);
    }

    #[test]
    fn weekday_from_name_round_trips() {
        for name in WEEKDAY_NAMES {
            let weekday = weekday_from_name(name).unwrap();
            assert_eq!(weekday_name(weekday), name);
        }
        assert_eq!(weekday_from_name("someday"), None);
    }

    #[test]
    fn partial_document_loads_with_defaults() {
        let doc: TimetableDocument =
            serde_json::from_str(r#"{"timetable":[{"day":"Monday","periods":[{"subject":"Maths"}]}]}"#)
                .unwrap();
        let period = &doc.day("monday").unwrap().periods[0];
        assert_eq!(period.subject, "Maths");
        assert_eq!(period.period_number, 0);
        assert_eq!(period.start_time, "");
        assert!(!period.is_break);
        assert_eq!(doc.metadata.year, 0);
    }

    #[test]
    fn period_serializes_with_wire_field_names() {
        let period = Period {
            period_number: 1,
            subject: "Maths".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:50".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&period).unwrap();
        assert_eq!(json["periodNumber"], 1);
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["isBreak"], false);
    }
}
