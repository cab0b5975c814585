// Digest refresh command - fetch the newest post, parse it, store weekly-update.json
use super::settings::get_settings;
use crate::digest::{parse_post, DigestPost};
use crate::feed::{fetch_latest_post, HttpClient};
use crate::file_manager::write_json_file;
use crate::models::WeeklyUpdate;
use crate::utils::get_weekly_update_json_path;
use log::info;
use std::fs;
use std::path::Path;

const DEFAULT_POST_TITLE: &str = "Weekly Bonuses and Discounts";

/// Fetch and parse the latest digest post, then save it as the bundled weekly update
pub fn refresh_weekly_update() -> Result<WeeklyUpdate, String> {
    let settings = get_settings()?;
    let client = HttpClient::new(&settings.user_agent, settings.request_timeout_secs);

    let post = fetch_latest_post(&client, &settings.digest_search_url).map_err(|e| e.to_string())?;
    info!("Fetched digest post: {} ({} characters)", post.title, post.selftext.len());

    save_update(parse_post(&post))
}

/// Parse a saved markdown body instead of fetching (useful when the endpoint is rate limited)
pub fn import_weekly_update(body_path: &Path, title: Option<String>) -> Result<WeeklyUpdate, String> {
    let body = fs::read_to_string(body_path)
        .map_err(|e| format!("Failed to read {:?}: {}", body_path, e))?;
    let title = title.unwrap_or_else(|| DEFAULT_POST_TITLE.to_string());

    save_update(parse_post(&DigestPost::new(title, body)))
}

fn save_update(update: WeeklyUpdate) -> Result<WeeklyUpdate, String> {
    let path = get_weekly_update_json_path();
    write_json_file(&path, &update).map_err(|e| e.to_string())?;

    info!(
        "Saved weekly update for {} ({} bonuses, {} discounts) to {:?}",
        update.week_of,
        update.bonuses.len(),
        update.discounts.len(),
        path
    );

    Ok(update)
}
