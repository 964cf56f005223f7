//! Reprocess command: group the latest snapshot in place.

use timetable_core::grouping::reprocess_latest;
use timetable_core::TimetableError;

use crate::app::AppContext;

pub fn handle_reprocess(ctx: &AppContext) -> anyhow::Result<()> {
    match reprocess_latest(&ctx.store) {
        Ok(changes) => {
            if !ctx.quiet {
                if changes.is_empty() {
                    println!("No consecutive periods found to group");
                } else {
                    println!("Grouped {} consecutive period(s):", changes.len());
                    for change in &changes {
                        println!("  {change}");
                    }
                    println!("Tip: if periods are out of chronological order, auto-reorder them in `timetable edit` first.");
                }
            }
            Ok(())
        }
        Err(TimetableError::NotFound(_)) => Err(anyhow::anyhow!(
            "No timetable found. Import one with `timetable import` first."
        )),
        Err(err) => Err(err.into()),
    }
}
