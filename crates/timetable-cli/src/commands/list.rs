//! List command: stored snapshots, newest first.

use crate::app::AppContext;
use crate::cli::ListArgs;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let snapshots = ctx.store.list_snapshots();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
        return Ok(());
    }

    if snapshots.is_empty() {
        println!(
            "No timetable snapshots found in {}",
            ctx.store.dir().display()
        );
        return Ok(());
    }

    for (i, id) in snapshots.iter().enumerate() {
        if i == 0 {
            println!("{id} (latest)");
        } else {
            println!("{id}");
        }
    }
    Ok(())
}
