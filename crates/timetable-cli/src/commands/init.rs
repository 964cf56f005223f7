//! Init command: create the snapshot directory and point the config at it.

use std::path::PathBuf;

use crate::config::{self, TimetableConfig, TimetableSection};

pub fn handle_init(dir: Option<String>, quiet: bool) -> anyhow::Result<()> {
    let dir = match dir {
        Some(dir) => PathBuf::from(dir),
        None => config::default_data_dir()?,
    };
    std::fs::create_dir_all(&dir)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", dir.display(), e))?;

    let config_path = config::default_config_path()?;
    let config = TimetableConfig {
        timetable: TimetableSection {
            dir: dir.to_string_lossy().to_string(),
        },
    };
    config::write_config(&config_path, &config)?;

    if !quiet {
        println!("Initialized timetable directory at {}", dir.display());
        println!("Wrote config to {}", config_path.display());
    }
    Ok(())
}
