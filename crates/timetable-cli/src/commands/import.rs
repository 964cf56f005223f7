//! Import command: store an uploaded timetable document as a new snapshot.
//!
//! Mirrors the upload flow: parse strictly, group consecutive periods unless
//! told not to, then save under a fresh timestamp id so the new snapshot
//! becomes the latest.

use chrono::Local;

use timetable_core::grouping::group_consecutive_periods;
use timetable_core::model::TimetableDocument;
use timetable_core::store::snapshot_id_for;

use crate::app::AppContext;
use crate::cli::ImportArgs;

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", args.file, e))?;
    let mut document: TimetableDocument = serde_json::from_str(&json).map_err(|e| {
        anyhow::anyhow!("{} is not a valid timetable document: {}", args.file, e)
    })?;

    let changes = if args.no_group {
        Vec::new()
    } else {
        group_consecutive_periods(&mut document)
    };

    let id = snapshot_id_for(Local::now().naive_local());
    ctx.store.save(&document, &id)?;

    if let Some(pdf) = &args.pdf {
        let destination = ctx.store.dir().join(format!("{id}.pdf"));
        std::fs::copy(pdf, &destination)
            .map_err(|e| anyhow::anyhow!("Failed to copy {}: {}", pdf, e))?;
    }

    if !ctx.quiet {
        println!("Imported snapshot {id}");
        for change in &changes {
            println!("  {change}");
        }
    }
    Ok(())
}
