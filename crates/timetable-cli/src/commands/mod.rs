//! Command handlers for the timetable CLI.

pub mod check;
pub mod edit;
pub mod find_replace;
pub mod import;
pub mod init;
pub mod list;
pub mod now;
pub mod reprocess;
pub mod show;
