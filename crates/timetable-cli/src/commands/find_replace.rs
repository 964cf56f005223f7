//! Find-replace command: rename a subject across the whole timetable.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm};

use timetable_core::editor::EditSession;
use timetable_core::TimetableError;

use crate::app::AppContext;
use crate::cli::FindReplaceArgs;

pub fn handle_find_replace(ctx: &AppContext, args: &FindReplaceArgs) -> anyhow::Result<()> {
    if args.replace.trim().is_empty() && !args.yes {
        if !std::io::stdin().is_terminal() {
            anyhow::bail!(
                "Replace text is empty; pass --yes to confirm clearing matching subject names"
            );
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Replace text is empty. This will clear the subject name. Continue?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let mut session = match EditSession::open(&ctx.store) {
        Ok(session) => session,
        Err(TimetableError::NotFound(_)) => {
            anyhow::bail!("No timetable found. Import one with `timetable import` first.")
        }
        Err(err) => return Err(err.into()),
    };

    let count = session.find_replace_subject(&args.find, &args.replace)?;
    if count == 0 {
        println!("No subjects matched '{}'", args.find);
        return Ok(());
    }

    match session.save(&ctx.store) {
        Ok(()) => {
            if !ctx.quiet {
                println!(
                    "Replaced {count} subject(s); saved snapshot {}",
                    session.snapshot_id()
                );
            }
            Ok(())
        }
        Err(TimetableError::Validation(errors)) => {
            // Nothing was written; the replacement itself made the document
            // invalid (an empty replacement clears subjects, for one)
            eprintln!("Changes not saved. Please fix the following errors:");
            for error in &errors {
                eprintln!("  {error}");
            }
            Err(anyhow::anyhow!(
                "replacement would leave {} validation error(s); use `timetable edit` to fix the document interactively",
                errors.len()
            ))
        }
        Err(err) => Err(err.into()),
    }
}
