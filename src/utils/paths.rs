use crate::error::{Result, TrackerError};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

static APP_DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Override the data root (e.g. from `--data-dir`). Only the first call wins,
/// and only if nothing has read the root yet.
pub fn set_app_data_dir(dir: PathBuf) -> bool {
    APP_DATA_DIR.set(dir).is_ok()
}

pub fn get_app_data_dir() -> PathBuf {
    APP_DATA_DIR
        .get_or_init(|| {
            let base_dir = dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."));
            base_dir.join("WeeklyTracker")
        })
        .clone()
}

pub fn get_data_dir() -> PathBuf {
    get_app_data_dir().join("data")
}

pub fn get_logs_dir() -> PathBuf {
    get_app_data_dir().join("logs")
}

pub fn get_weekly_update_json_path() -> PathBuf {
    get_data_dir().join(WEEKLY_UPDATE_FILE)
}

pub fn get_vehicle_data_json_path() -> PathBuf {
    get_data_dir().join(VEHICLE_DATA_FILE)
}

pub fn get_property_images_json_path() -> PathBuf {
    get_data_dir().join(PROPERTY_IMAGES_FILE)
}

pub fn get_settings_json_path() -> PathBuf {
    get_data_dir().join("settings.json")
}

pub const WEEKLY_UPDATE_FILE: &str = "weekly-update.json";
pub const VEHICLE_DATA_FILE: &str = "vehicle_data.json";
pub const PROPERTY_IMAGES_FILE: &str = "property_images.json";

pub fn initialize_data_directories() -> Result<()> {
    let directories = [get_data_dir(), get_logs_dir()];

    for dir in &directories {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| TrackerError::io(dir, e))?;
            info!("Created directory: {:?}", dir);
        }
    }

    Ok(())
}
