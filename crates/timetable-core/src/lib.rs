//! # Timetable Core
//!
//! Core library for the timetable engine - loading, querying, restructuring,
//! and persisting JSON-encoded weekly timetable snapshots.
//!
//! This crate provides the domain logic independent of any user interface.
//!
//! ## Architecture
//!
//! - **model**: The schedule data model (document, day, period) and time parsing
//! - **store**: Snapshot enumeration, loading, and persistence on disk
//! - **resolver**: "What class is happening now, and what's next" queries
//! - **grouping**: Merging runs of consecutive same-subject periods
//! - **validate**: Whole-document validation used as the save gate
//! - **editor**: An in-memory, validated edit session over one snapshot

pub mod editor;
pub mod error;
pub mod grouping;
pub mod model;
pub mod resolver;
pub mod store;
pub mod validate;

pub use error::{Result, TimetableError};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
