//! Weekly digest post parsing
//! Turns the community "Weekly Bonuses and Discounts" markdown post into a `WeeklyUpdate`.

pub mod markdown;
pub mod sections;

pub use markdown::clean_text;
pub use sections::*;

use crate::models::WeeklyUpdate;
use serde::{Deserialize, Serialize};

/// Title and markdown body of one digest post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigestPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub permalink: String,
}

impl DigestPost {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            selftext: body.into(),
            ..Default::default()
        }
    }
}

pub fn parse_post(post: &DigestPost) -> WeeklyUpdate {
    let body = post.selftext.as_str();

    WeeklyUpdate {
        week_of: clean_title(&post.title),
        intro_messages: extract_intro_messages(body),
        podium_vehicle: extract_field(body, "Podium Vehicle"),
        prize_ride_vehicle: extract_field(body, "Prize Ride Vehicle"),
        prize_ride_challenge: extract_field(body, "Prize Ride Challenge"),
        time_trial: extract_field(body, "Time Trial"),
        premium_race: extract_field(body, "Premium Race"),
        hsw_time_trial: extract_field(body, "HSW Time Trial"),
        salvage_yard_robberies: extract_salvage_yard_robberies(body),
        weekly_challenge: extract_weekly_challenge(body),
        bonuses: extract_bonuses(body),
        discounts: extract_discounts(body),
    }
}
