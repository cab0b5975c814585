// Settings command handlers - JSON file storage in the data directory
use crate::file_manager::{read_json_file, write_json_file};
use crate::models::Settings;
use crate::utils::get_settings_json_path;
use log::debug;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsParams {
    pub data_source_url: Option<String>,
    pub placeholder_image_url: Option<String>,
    pub digest_search_url: Option<String>,
    pub user_agent: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub log_to_file: Option<bool>,
}

/// Get current settings from the JSON file
pub fn get_settings() -> Result<Settings, String> {
    let path = get_settings_json_path();

    if !path.exists() {
        return Ok(Settings::default());
    }

    read_json_file(&path).map_err(|e| e.to_string())
}

/// Update settings with partial update support
pub fn update_settings(settings: UpdateSettingsParams) -> Result<Settings, String> {
    let current_settings = get_settings()?;
    let updated = apply_settings_update(current_settings, settings);

    write_json_file(&get_settings_json_path(), &updated).map_err(|e| e.to_string())?;

    debug!("Updated settings: {:?}", updated);

    Ok(updated)
}

pub fn apply_settings_update(mut current_settings: Settings, settings: UpdateSettingsParams) -> Settings {
    // Empty string clears the URL and falls back to the bundled data
    if let Some(data_source_url) = settings.data_source_url {
        current_settings.data_source_url = if data_source_url.is_empty() {
            None
        } else {
            Some(data_source_url)
        };
    }
    if let Some(placeholder_image_url) = settings.placeholder_image_url {
        if !placeholder_image_url.is_empty() {
            current_settings.placeholder_image_url = placeholder_image_url;
        }
    }
    if let Some(digest_search_url) = settings.digest_search_url {
        if !digest_search_url.is_empty() {
            current_settings.digest_search_url = digest_search_url;
        }
    }
    if let Some(user_agent) = settings.user_agent {
        if !user_agent.is_empty() {
            current_settings.user_agent = user_agent;
        }
    }
    if let Some(request_timeout_secs) = settings.request_timeout_secs {
        current_settings.request_timeout_secs = request_timeout_secs;
    }
    if let Some(log_to_file) = settings.log_to_file {
        current_settings.log_to_file = log_to_file;
    }

    current_settings
}

/// Parse a `key=value` assignment from the command line
pub fn parse_setting_assignment(assignment: &str) -> Result<UpdateSettingsParams, String> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| format!("Expected KEY=VALUE, got {:?}", assignment))?;
    let value = value.trim().to_string();

    let mut params = UpdateSettingsParams::default();
    match key.trim() {
        "data_source_url" => params.data_source_url = Some(value),
        "placeholder_image_url" => params.placeholder_image_url = Some(value),
        "digest_search_url" => params.digest_search_url = Some(value),
        "user_agent" => params.user_agent = Some(value),
        "request_timeout_secs" => {
            params.request_timeout_secs = Some(
                value
                    .parse()
                    .map_err(|e| format!("Invalid request_timeout_secs {:?}: {}", value, e))?,
            )
        }
        "log_to_file" => {
            params.log_to_file = Some(
                value
                    .parse()
                    .map_err(|e| format!("Invalid log_to_file {:?}: {}", value, e))?,
            )
        }
        other => return Err(format!("Unknown setting: {}", other)),
    }

    Ok(params)
}
