//! Logging utilities for Weekly Tracker
//! Sets up the env_logger backend and handles log file cleanup for 7-day retention

use crate::utils::get_logs_dir;
use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::{info, warn, LevelFilter};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const LOG_RETENTION_DAYS: u64 = 7;

/// Initialise the global logger. `RUST_LOG` still overrides `level` per module.
/// With `to_file` set, output goes to today's file in the logs dir instead of stderr.
pub fn init_logging(level: LevelFilter, to_file: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));

    let mut opened = None;
    if to_file {
        let path = log_file_path(&get_logs_dir());
        let file = path
            .parent()
            .map(fs::create_dir_all)
            .transpose()
            .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

        match file {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
                opened = Some(path);
            }
            Err(e) => eprintln!("Failed to open log file {:?}: {}", path, e),
        }
    }

    if builder.try_init().is_err() {
        return;
    }

    if let Some(path) = opened {
        info!("Logging to {:?}", path);
        cleanup_old_logs(path.parent().unwrap_or_else(|| Path::new(".")));
    }
}

pub fn log_file_path(logs_dir: &Path) -> PathBuf {
    logs_dir.join(format!("weekly-tracker-{}.log", Local::now().format("%Y-%m-%d")))
}

pub fn cleanup_old_logs(logs_dir: &Path) {
    if !logs_dir.exists() {
        return;
    }

    let retention = Duration::from_secs(LOG_RETENTION_DAYS * 24 * 60 * 60);
    let now = SystemTime::now();

    if let Ok(entries) = fs::read_dir(logs_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "log") {
                if let Ok(meta) = fs::metadata(&path) {
                    if let Ok(modified) = meta.modified() {
                        if let Ok(age) = now.duration_since(modified) {
                            if age > retention {
                                match fs::remove_file(&path) {
                                    Ok(()) => info!("Cleaned up old log: {:?}", path.file_name()),
                                    Err(e) => warn!("Failed to remove old log {:?}: {}", path, e),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_log_file_name_is_dated() {
        let path = log_file_path(Path::new("/tmp/logs"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();

        assert!(name.starts_with("weekly-tracker-"));
        assert!(name.ends_with(".log"));
        assert_eq!(name.len(), "weekly-tracker-YYYY-MM-DD.log".len());
    }

    #[test]
    fn test_cleanup_keeps_recent_logs() {
        let dir = tempdir().unwrap();
        let recent = dir.path().join("weekly-tracker-today.log");
        let other = dir.path().join("notes.txt");
        fs::write(&recent, "hello").unwrap();
        fs::write(&other, "keep").unwrap();

        cleanup_old_logs(dir.path());

        assert!(recent.exists());
        assert!(other.exists());
    }
}
