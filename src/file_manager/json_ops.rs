// Atomic JSON file operations

use crate::error::{Result, TrackerError};
use log::info;
use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

lazy_static::lazy_static! {
    static ref FILE_LOCK: Mutex<()> = Mutex::new(());
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let _lock = FILE_LOCK.lock();

    if !path.exists() {
        return Err(TrackerError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|e| TrackerError::io(path, e))?;

    serde_json::from_str(&contents).map_err(|e| TrackerError::json(path.display(), e))
}

/// Writes JSON atomically using write-to-temp-then-rename
pub fn write_json_file<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let _lock = FILE_LOCK.lock();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| TrackerError::io(parent, e))?;
    }

    let json_string =
        serde_json::to_string_pretty(data).map_err(|e| TrackerError::json(path.display(), e))?;

    let temp_path = path.with_extension("tmp");

    let mut temp_file = File::create(&temp_path).map_err(|e| TrackerError::io(&temp_path, e))?;

    temp_file
        .write_all(json_string.as_bytes())
        .map_err(|e| TrackerError::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| TrackerError::io(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| TrackerError::io(path, e))?;

    Ok(())
}

pub fn initialize_json_file<T: Serialize>(path: &Path, default: &T) -> Result<()> {
    if !path.exists() {
        info!("Initializing JSON file: {:?}", path);
        write_json_file(path, default)?;
    }
    Ok(())
}

pub fn read_json_file_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if path.exists() {
        read_json_file(path)
    } else {
        Ok(T::default())
    }
}

pub fn update_json_file<T, F>(path: &Path, update_fn: F) -> Result<T>
where
    T: DeserializeOwned + Serialize + Default,
    F: FnOnce(&mut T),
{
    let mut data: T = read_json_file_or_default(path)?;
    update_fn(&mut data);
    write_json_file(path, &data)?;
    Ok(data)
}
