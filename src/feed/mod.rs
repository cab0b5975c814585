//! Data loading
//! Fetches the weekly update and lookup tables from a configured base URL, or
//! reads the bundled copies from the data directory when no URL is set.

mod client;
pub mod digest;

pub use client::HttpClient;
pub use digest::fetch_latest_post;

use crate::error::{Result, TrackerError};
use crate::file_manager::read_json_file;
use crate::models::{DashboardState, PropertyTable, Settings, VehicleTable, WeeklyUpdate};
use crate::utils::{PROPERTY_IMAGES_FILE, VEHICLE_DATA_FILE, WEEKLY_UPDATE_FILE};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use url::Url;

pub const LOAD_ERROR_MESSAGE: &str =
    "Unable to load tracker data. Check your data source URL or bundled data files.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(Url),
    Local(PathBuf),
}

pub struct TrackerApi {
    source: DataSource,
    client: HttpClient,
}

impl TrackerApi {
    pub fn new(source: DataSource, client: HttpClient) -> Self {
        Self { source, client }
    }

    /// Remote source when `data_source_url` is set, otherwise `data_dir`
    pub fn from_settings(settings: &Settings, data_dir: PathBuf) -> Result<Self> {
        let client = HttpClient::new(&settings.user_agent, settings.request_timeout_secs);
        let source = match settings.data_source_url.as_deref().map(str::trim) {
            Some(base) if !base.is_empty() => DataSource::Remote(parse_base_url(base)?),
            _ => DataSource::Local(data_dir),
        };
        Ok(Self::new(source, client))
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn fetch_weekly_update(&self) -> Result<WeeklyUpdate> {
        self.fetch(WEEKLY_UPDATE_FILE)
    }

    pub fn fetch_vehicle_data(&self) -> Result<VehicleTable> {
        self.fetch(VEHICLE_DATA_FILE)
    }

    pub fn fetch_property_images(&self) -> Result<PropertyTable> {
        self.fetch(PROPERTY_IMAGES_FILE)
    }

    fn fetch<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        match &self.source {
            DataSource::Remote(base) => {
                let url = base
                    .join(file_name)
                    .map_err(|e| TrackerError::InvalidUrl(file_name.to_string(), e))?;
                self.client.get_json(url.as_str())
            }
            DataSource::Local(dir) => read_json_file(&dir.join(file_name)),
        }
    }

    /// Load everything a screen needs. A failed weekly update becomes the
    /// "no data" state; a failed lookup table becomes an empty table.
    pub fn load_dashboard(&self) -> DashboardState {
        let mut state = DashboardState::default();

        match self.fetch_weekly_update() {
            Ok(update) => {
                info!("Loaded weekly update for {}", update.week_of);
                state.weekly_update = Some(update);
            }
            Err(e) => {
                error!("Failed to load weekly update: {}", e);
                state.error_message = Some(LOAD_ERROR_MESSAGE.to_string());
                return state;
            }
        }

        state.vehicles = self.fetch_vehicle_data().unwrap_or_else(|e| {
            warn!("Vehicle table unavailable, continuing without it: {}", e);
            VehicleTable::new()
        });

        state.properties = self.fetch_property_images().unwrap_or_else(|e| {
            warn!("Property table unavailable, continuing without it: {}", e);
            PropertyTable::new()
        });

        state
    }
}

/// Parse a base URL so that `join("file.json")` appends rather than replaces
/// the last path segment
pub fn parse_base_url(base: &str) -> Result<Url> {
    let normalized = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    };
    Url::parse(&normalized).map_err(|e| TrackerError::InvalidUrl(base.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_manager::write_json_file;
    use crate::models::{PropertyRecord, VehicleRecord, DEFAULT_IMAGE};
    use crate::resolver::Resolver;
    use tempfile::tempdir;

    fn local_api(dir: PathBuf) -> TrackerApi {
        TrackerApi::new(DataSource::Local(dir), HttpClient::new("test", 1))
    }

    #[test]
    fn test_parse_base_url() {
        let url = parse_base_url("https://example.com/tracker").unwrap();
        assert_eq!(
            url.join("weekly-update.json").unwrap().as_str(),
            "https://example.com/tracker/weekly-update.json"
        );
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn test_from_settings_picks_source() {
        let local = TrackerApi::from_settings(&Settings::default(), PathBuf::from("/data")).unwrap();
        assert_eq!(local.source(), &DataSource::Local(PathBuf::from("/data")));

        let settings = Settings {
            data_source_url: Some("https://example.com/data".to_string()),
            ..Settings::default()
        };
        let remote = TrackerApi::from_settings(&settings, PathBuf::from("/data")).unwrap();
        assert!(matches!(remote.source(), DataSource::Remote(_)));
    }

    #[test]
    fn test_load_dashboard_without_data() {
        let dir = tempdir().unwrap();
        let state = local_api(dir.path().to_path_buf()).load_dashboard();

        assert!(!state.has_data());
        assert_eq!(state.error_message.as_deref(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn test_load_dashboard_with_missing_tables() {
        let dir = tempdir().unwrap();
        write_json_file(
            &dir.path().join(WEEKLY_UPDATE_FILE),
            &WeeklyUpdate::empty("May 1 to May 8"),
        )
        .unwrap();

        let state = local_api(dir.path().to_path_buf()).load_dashboard();

        assert!(state.has_data());
        assert!(state.error_message.is_none());
        assert!(state.vehicles.is_empty());
        assert!(state.properties.is_empty());
    }

    #[test]
    fn test_load_dashboard_with_tables() {
        let dir = tempdir().unwrap();
        let mut vehicles = VehicleTable::new();
        vehicles.insert("Cheval Taipan".to_string(), VehicleRecord::new("t"));
        let mut properties = PropertyTable::new();
        properties.insert("Eclipse Towers".to_string(), PropertyRecord::new("A", "B"));

        write_json_file(&dir.path().join(WEEKLY_UPDATE_FILE), &WeeklyUpdate::empty("w")).unwrap();
        write_json_file(&dir.path().join(VEHICLE_DATA_FILE), &vehicles).unwrap();
        write_json_file(&dir.path().join(PROPERTY_IMAGES_FILE), &properties).unwrap();

        let state = local_api(dir.path().to_path_buf()).load_dashboard();

        assert_eq!(state.vehicles, vehicles);
        assert_eq!(state.properties, properties);
    }

    #[test]
    fn test_null_image_record_keeps_vehicle_table() {
        let dir = tempdir().unwrap();
        write_json_file(&dir.path().join(WEEKLY_UPDATE_FILE), &WeeklyUpdate::empty("w")).unwrap();
        std::fs::write(
            dir.path().join(VEHICLE_DATA_FILE),
            r#"{
                "Cheval Taipan": {"image_url": "https://img/taipan.jpg", "original_price": 1980000, "discounted_price": 1386000},
                "Ocelot Pariah": {"image_url": null, "original_price": 100000, "discounted_price": 75000}
            }"#,
        )
        .unwrap();

        let state = local_api(dir.path().to_path_buf()).load_dashboard();
        assert_eq!(state.vehicles.len(), 2);

        let items = Resolver::new(Some(&state.vehicles), None)
            .resolve(&["30% Off: Cheval Taipan", "25% Off: Ocelot Pariah"]);

        assert_eq!(items[0].image_url, "https://img/taipan.jpg");
        assert_eq!(items[1].image_url, DEFAULT_IMAGE);
        assert_eq!(items[1].original_price, Some(100_000));
    }
}
