//! Now command: current and next class for an instant.
//!
//! The instant defaults to the wall clock but both the day and the time can be
//! overridden, which keeps the resolver itself clock-free.

use chrono::{Datelike, Local};

use timetable_core::model::{parse_time, weekday_from_name};
use timetable_core::resolver;

use crate::app::AppContext;
use crate::cli::NowArgs;
use crate::output;

pub fn handle_now(ctx: &AppContext, args: &NowArgs) -> anyhow::Result<()> {
    let Some(document) = ctx.store.load_latest() else {
        if args.json {
            println!("{}", serde_json::json!({ "current": null, "next": null }));
        } else {
            println!("No timetable found. Import one with `timetable import`.");
        }
        return Ok(());
    };

    let now = Local::now();
    let day = match &args.day {
        Some(text) => weekday_from_name(text)
            .ok_or_else(|| anyhow::anyhow!("Unknown day: {text}"))?,
        None => now.date_naive().weekday(),
    };
    let at = match &args.at {
        Some(text) => parse_time(text)
            .ok_or_else(|| anyhow::anyhow!("Invalid time (use HH:MM): {text}"))?,
        None => now.time(),
    };

    let context = resolver::current_and_next(&document, day, at);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "current": context.current,
                "next": context.next,
            }))?
        );
        return Ok(());
    }

    match &context.current {
        Some(period) => println!("Now: {}", output::period_summary(period)),
        None => println!("No class in session."),
    }
    match &context.next {
        Some(period) => println!("Next: {}", output::period_summary(period)),
        None => {
            if resolver::after_last_period(&document, day, at) {
                println!("School day is over.");
            }
        }
    }
    Ok(())
}
