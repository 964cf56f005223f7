//! Timetable CLI - inspect, reprocess, and hand-edit weekly school timetable
//! snapshots stored as timestamped JSON files.

mod app;
mod cli;
mod commands;
mod config;
mod output;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Completions { shell } => {
            generate(
                *shell,
                &mut Cli::command(),
                "timetable",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        Commands::Init(args) => {
            commands::init::handle_init(args.dir.clone().or_else(|| cli.dir.clone()), cli.quiet)
        }
        command => {
            let ctx = AppContext::resolve(cli.dir.clone(), cli.quiet)?;
            match command {
                Commands::Import(args) => commands::import::handle_import(&ctx, args),
                Commands::List(args) => commands::list::handle_list(&ctx, args),
                Commands::Show(args) => commands::show::handle_show(&ctx, args),
                Commands::Now(args) => commands::now::handle_now(&ctx, args),
                Commands::Reprocess => commands::reprocess::handle_reprocess(&ctx),
                Commands::FindReplace(args) => {
                    commands::find_replace::handle_find_replace(&ctx, args)
                }
                Commands::Edit => commands::edit::handle_edit(&ctx),
                Commands::Check(args) => commands::check::handle_check(&ctx, args),
                Commands::Init(_) | Commands::Completions { .. } => unreachable!(),
            }
        }
    }
}
