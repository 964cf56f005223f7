//! Table and text rendering for timetable data.

use comfy_table::{presets, Table};
use owo_colors::{OwoColorize, Stream};

use timetable_core::model::{DaySchedule, Period};

/// Day name heading, bold when stdout supports color.
pub fn day_heading(name: &str) -> String {
    format!("{}", name.if_supports_color(Stream::Stdout, |t| t.bold()))
}

/// Render a day's periods as a table.
pub fn day_table(day: &DaySchedule) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "#", "Subject", "Teacher", "Room", "Start", "End", "Break",
    ]);
    for period in &day.periods {
        table.add_row(vec![
            period.period_number.to_string(),
            period.subject.clone(),
            period.teacher.clone(),
            period.room.clone(),
            period.start_time.clone(),
            period.end_time.clone(),
            if period.is_break {
                "yes".to_string()
            } else {
                String::new()
            },
        ]);
    }
    table
}

/// One-line period summary for resolver output and editor prompts.
pub fn period_summary(period: &Period) -> String {
    let mut summary = format!(
        "{} ({}-{})",
        period.subject, period.start_time, period.end_time
    );
    if !period.room.is_empty() {
        summary.push_str(&format!(" in {}", period.room));
    }
    if !period.teacher.is_empty() {
        summary.push_str(&format!(" with {}", period.teacher));
    }
    summary
}
