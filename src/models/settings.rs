// Settings data models
use serde::{Deserialize, Serialize};

/// Shown whenever a line resolves to no vehicle or property
pub const DEFAULT_IMAGE: &str = "https://static.wikia.nocookie.net/gtawiki/images/5/50/GTAOnlineWebsite-ScreensPC-589-3840.jpg/revision/latest/scale-to-width-down/1000?cb=20210629175043";

pub const DEFAULT_DIGEST_SEARCH_URL: &str = "https://www.reddit.com/r/gtaonline/search.json?q=title:%22Weekly+Bonuses+and+Discounts%22&restrict_sr=1&sort=new&limit=1";

pub const DEFAULT_USER_AGENT: &str = "GTAWeeklyTrack/1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL serving weekly-update.json, vehicle_data.json and property_images.json.
    /// When unset the bundled copies in the data directory are used.
    #[serde(default)]
    pub data_source_url: Option<String>,
    #[serde(default = "default_placeholder")]
    pub placeholder_image_url: String,
    #[serde(default = "default_search_url")]
    pub digest_search_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_placeholder() -> String {
    DEFAULT_IMAGE.to_string()
}

fn default_search_url() -> String {
    DEFAULT_DIGEST_SEARCH_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout() -> u64 {
    15
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_source_url: None,
            placeholder_image_url: default_placeholder(),
            digest_search_url: default_search_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_timeout(),
            log_to_file: false,
        }
    }
}
