//! Edit command: an interactive session over the latest snapshot.
//!
//! Drives an [`EditSession`] through a dialoguer menu loop. The session is the
//! single source of truth; this module only gathers inputs, confirms the
//! destructive choices, and renders results.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use timetable_core::editor::{EditSession, PeriodEdit};
use timetable_core::TimetableError;

use crate::app::AppContext;
use crate::output;

const ACTIONS: [&str; 13] = [
    "Show day",
    "Add period",
    "Delete period",
    "Move period",
    "Edit period fields",
    "Set period time",
    "Auto-reorder day by time",
    "Auto-reorder all days",
    "Renumber day",
    "Find & replace subject",
    "Validate",
    "Save and exit",
    "Cancel",
];

pub fn handle_edit(ctx: &AppContext) -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("edit requires an interactive terminal");
    }

    let mut session = match EditSession::open(&ctx.store) {
        Ok(session) => session,
        Err(TimetableError::NotFound(_)) => {
            anyhow::bail!("No timetable found. Import one with `timetable import` first.")
        }
        Err(err) => return Err(err.into()),
    };

    println!("Editing snapshot {}", session.snapshot_id());
    let theme = ColorfulTheme::default();

    loop {
        let action = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match ACTIONS[action] {
            "Show day" => {
                let day = pick_day(&theme, &session)?;
                show_day(&session, &day);
            }
            "Add period" => {
                let day = pick_day(&theme, &session)?;
                let number = session.add_period(&day)?;
                println!("Added Period {number} to {day}");
            }
            "Delete period" => {
                let day = pick_day(&theme, &session)?;
                let Some(index) = pick_period(&theme, &session, &day)? else {
                    continue;
                };
                let (number, subject) = match session.day(&day).and_then(|d| d.periods.get(index))
                {
                    Some(period) => (period.period_number, period.subject.clone()),
                    None => continue,
                };
                let confirmed = Confirm::with_theme(&theme)
                    .with_prompt(format!(
                        "Are you sure you want to delete Period {number} ({subject})?"
                    ))
                    .default(false)
                    .interact()?;
                if confirmed {
                    session.delete_period(&day, index)?;
                    println!("Deleted Period {number} from {day}");
                }
            }
            "Move period" => {
                let day = pick_day(&theme, &session)?;
                let Some(from) = pick_period(&theme, &session, &day)? else {
                    continue;
                };
                let count = session.day(&day).map(|d| d.periods.len()).unwrap_or(0);
                let to: usize = Input::with_theme(&theme)
                    .with_prompt(format!("New position (1-{count})"))
                    .validate_with(|input: &usize| {
                        if (1..=count).contains(input) {
                            Ok(())
                        } else {
                            Err(format!("enter a position between 1 and {count}"))
                        }
                    })
                    .interact_text()?;
                session.move_period(&day, from, to - 1)?;
                println!("Periods renumbered sequentially (1-{count})");
            }
            "Edit period fields" => {
                let day = pick_day(&theme, &session)?;
                let Some(index) = pick_period(&theme, &session, &day)? else {
                    continue;
                };
                let Some(current) = session.day(&day).and_then(|d| d.periods.get(index).cloned())
                else {
                    continue;
                };
                let subject: String = Input::with_theme(&theme)
                    .with_prompt("Subject")
                    .with_initial_text(current.subject)
                    .allow_empty(true)
                    .interact_text()?;
                let teacher: String = Input::with_theme(&theme)
                    .with_prompt("Teacher")
                    .with_initial_text(current.teacher)
                    .allow_empty(true)
                    .interact_text()?;
                let room: String = Input::with_theme(&theme)
                    .with_prompt("Room")
                    .with_initial_text(current.room)
                    .allow_empty(true)
                    .interact_text()?;
                let is_break = Confirm::with_theme(&theme)
                    .with_prompt("Is this a break?")
                    .default(current.is_break)
                    .interact()?;
                session.update_period(
                    &day,
                    index,
                    PeriodEdit {
                        subject: Some(subject),
                        teacher: Some(teacher),
                        room: Some(room),
                        is_break: Some(is_break),
                    },
                )?;
            }
            "Set period time" => {
                let day = pick_day(&theme, &session)?;
                let Some(index) = pick_period(&theme, &session, &day)? else {
                    continue;
                };
                let Some(current) = session.day(&day).and_then(|d| d.periods.get(index).cloned())
                else {
                    continue;
                };
                let start: String = Input::with_theme(&theme)
                    .with_prompt("Start time (HH:MM)")
                    .with_initial_text(current.start_time)
                    .interact_text()?;
                let end: String = Input::with_theme(&theme)
                    .with_prompt("End time (HH:MM)")
                    .with_initial_text(current.end_time)
                    .interact_text()?;
                session.set_period_time(&day, index, &start, &end)?;
                println!("{day} reordered by start time");
            }
            "Auto-reorder day by time" => {
                let day = pick_day(&theme, &session)?;
                session.auto_reorder(&day)?;
                println!("{day} reordered by start time");
            }
            "Auto-reorder all days" => {
                session.auto_reorder_all();
                println!("All days reordered by start time");
            }
            "Renumber day" => {
                let day = pick_day(&theme, &session)?;
                let count = session.renumber(&day)?;
                println!("Periods renumbered sequentially (1-{count})");
            }
            "Find & replace subject" => {
                let find: String = Input::with_theme(&theme)
                    .with_prompt("Find subject")
                    .interact_text()?;
                let replace: String = Input::with_theme(&theme)
                    .with_prompt("Replace with")
                    .allow_empty(true)
                    .interact_text()?;
                if replace.trim().is_empty() {
                    let confirmed = Confirm::with_theme(&theme)
                        .with_prompt(
                            "Replace text is empty. This will clear the subject name. Continue?",
                        )
                        .default(false)
                        .interact()?;
                    if !confirmed {
                        continue;
                    }
                }
                match session.find_replace_subject(&find, &replace) {
                    Ok(0) => println!("No subjects matched '{find}'"),
                    Ok(count) => println!("Replaced {count} subject(s)"),
                    Err(TimetableError::InvalidInput(msg)) => println!("{msg}"),
                    Err(err) => return Err(err.into()),
                }
            }
            "Validate" => {
                let errors = session.validate();
                if errors.is_empty() {
                    println!("No problems found");
                } else {
                    for error in &errors {
                        println!("{error}");
                    }
                }
            }
            "Save and exit" => match session.save(&ctx.store) {
                Ok(()) => {
                    println!("Timetable changes saved successfully");
                    break;
                }
                Err(TimetableError::Validation(errors)) => {
                    println!("Please fix the following errors:");
                    for error in &errors {
                        println!("  {error}");
                    }
                }
                Err(TimetableError::NotFound(_)) => {
                    anyhow::bail!("No timetable file found to save changes")
                }
                Err(err) => return Err(err.into()),
            },
            "Cancel" => {
                if session.is_dirty() {
                    let confirmed = Confirm::with_theme(&theme)
                        .with_prompt("You have unsaved changes. Are you sure you want to cancel?")
                        .default(false)
                        .interact()?;
                    if !confirmed {
                        continue;
                    }
                }
                println!("Changes discarded");
                break;
            }
            _ => unreachable!(),
        }
    }
    Ok(())
}

fn pick_day(theme: &ColorfulTheme, session: &EditSession) -> anyhow::Result<String> {
    let names: Vec<String> = session.day_names().iter().map(|n| n.to_string()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Day")
        .items(&names)
        .default(0)
        .interact()?;
    Ok(names[index].clone())
}

/// Pick a period by position in the day's list; `None` when the day is empty.
fn pick_period(
    theme: &ColorfulTheme,
    session: &EditSession,
    day: &str,
) -> anyhow::Result<Option<usize>> {
    let Some(schedule) = session.day(day) else {
        return Ok(None);
    };
    if schedule.periods.is_empty() {
        println!("No periods defined for {day}");
        return Ok(None);
    }
    let items: Vec<String> = schedule
        .periods
        .iter()
        .map(|p| format!("Period {}: {}", p.period_number, output::period_summary(p)))
        .collect();
    let index = Select::with_theme(theme)
        .with_prompt("Period")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(Some(index))
}

fn show_day(session: &EditSession, day: &str) {
    if let Some(schedule) = session.day(day) {
        println!("{}", output::day_heading(&schedule.day));
        println!("{}", output::day_table(schedule));
    }
}
