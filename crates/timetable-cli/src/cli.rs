use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use timetable_core::VERSION;

/// Timetable - inspect, reprocess, and edit weekly school timetable snapshots
#[derive(Parser)]
#[command(name = "timetable")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding timetable snapshots
    #[arg(short, long, global = true, env = "TIMETABLE_DIR")]
    pub dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the snapshot directory and write a config file pointing at it
    Init(InitArgs),

    /// Import a timetable JSON document as a new snapshot
    Import(ImportArgs),

    /// List stored snapshots, newest first
    List(ListArgs),

    /// Show one day's periods, or the whole week
    Show(ShowArgs),

    /// Show the current and next class from the latest snapshot
    Now(NowArgs),

    /// Re-group consecutive same-subject periods in the latest snapshot
    Reprocess,

    /// Replace a subject name across the whole timetable
    FindReplace(FindReplaceArgs),

    /// Interactively edit the latest snapshot
    Edit,

    /// Validate the latest snapshot
    Check(CheckArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Snapshot directory to use (defaults to the XDG data dir)
    #[arg(value_name = "DIR")]
    pub dir: Option<String>,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Path to the timetable JSON document
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Skip grouping consecutive same-subject periods on import
    #[arg(long)]
    pub no_group: bool,

    /// Store this PDF alongside the snapshot for display
    #[arg(long, value_name = "FILE")]
    pub pdf: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Day to show (e.g. "Monday"); omit for the whole week
    #[arg(value_name = "DAY")]
    pub day: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `now` command
#[derive(Args)]
pub struct NowArgs {
    /// Query time of day (HH:MM, defaults to the current time)
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<String>,

    /// Query day (defaults to today)
    #[arg(long, value_name = "DAY")]
    pub day: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `find-replace` command
#[derive(Args)]
pub struct FindReplaceArgs {
    /// Subject text to find (case-insensitive exact match)
    #[arg(value_name = "FIND")]
    pub find: String,

    /// Replacement text; empty clears the subject name
    #[arg(value_name = "REPLACE", default_value = "")]
    pub replace: String,

    /// Skip the empty-replacement confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
