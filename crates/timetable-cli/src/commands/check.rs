//! Check command: validation report for the latest snapshot.

use timetable_core::validate::validate_document;
use timetable_core::TimetableError;

use crate::app::AppContext;
use crate::cli::CheckArgs;

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    let (id, document) = match ctx.store.load_latest_strict() {
        Ok(loaded) => loaded,
        Err(TimetableError::NotFound(_)) => {
            println!("No timetable found. Import one with `timetable import`.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let errors = validate_document(&document);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "snapshot": id,
                "errors": errors,
            }))?
        );
    } else if errors.is_empty() {
        println!("{id}: OK");
    } else {
        for error in &errors {
            println!("{error}");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{} validation error(s) in snapshot {}",
            errors.len(),
            id
        ))
    }
}
