//! Application context shared by command handlers.
//!
//! Resolves the snapshot directory once: `--dir` flag (or `TIMETABLE_DIR`
//! env, which clap folds into the flag) wins, then the config file, then the
//! XDG data default.

use std::path::PathBuf;

use timetable_core::store::SnapshotStore;

use crate::config;

pub struct AppContext {
    pub store: SnapshotStore,
    pub quiet: bool,
}

impl AppContext {
    pub fn resolve(dir_flag: Option<String>, quiet: bool) -> anyhow::Result<Self> {
        let dir = match dir_flag {
            Some(dir) => PathBuf::from(dir),
            None => {
                let config_path = config::default_config_path()?;
                if config_path.exists() {
                    PathBuf::from(config::read_config(&config_path)?.timetable.dir)
                } else {
                    config::default_data_dir()?
                }
            }
        };
        Ok(Self {
            store: SnapshotStore::new(dir),
            quiet,
        })
    }
}
