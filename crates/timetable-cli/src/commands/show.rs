//! Show command: render one day or the whole week from the latest snapshot.

use timetable_core::model::{normalize_day_name, DaySchedule, WEEKDAY_NAMES};

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let Some(document) = ctx.store.load_latest() else {
        println!("No timetable found. Import one with `timetable import`.");
        return Ok(());
    };

    match &args.day {
        Some(text) => {
            let name = normalize_day_name(text)
                .ok_or_else(|| anyhow::anyhow!("Unknown day: {text}"))?;
            match document.day(name) {
                Some(day) if args.json => println!("{}", serde_json::to_string_pretty(day)?),
                Some(day) => print_day(day),
                None => println!("No periods defined for {name}"),
            }
        }
        None if args.json => println!("{}", serde_json::to_string_pretty(&document)?),
        None => {
            // Whole week, in canonical day order regardless of document order
            for name in WEEKDAY_NAMES {
                if let Some(day) = document.day(name) {
                    print_day(day);
                    println!();
                }
            }
        }
    }
    Ok(())
}

fn print_day(day: &DaySchedule) {
    println!("{}", output::day_heading(&day.day));
    println!("{}", output::day_table(day));
}
