// Resolved display records produced by the resolver
use serde::{Deserialize, Serialize};

use super::{SalvageYardRobbery, WeeklyUpdate};

/// Which lookup table produced an item's image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchSource {
    Vehicle { key: String },
    Property { key: String, occurrence: usize },
    Unmatched,
}

impl MatchSource {
    pub fn is_match(&self) -> bool {
        !matches!(self, MatchSource::Unmatched)
    }
}

/// One description line with its resolved image and prices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedItem {
    pub source_text: String,
    /// Text before the first `": "` (e.g. "30% Off"), if the line had one
    pub label: Option<String>,
    /// Text after the first `": "`, or the whole line
    pub name: String,
    pub image_url: String,
    pub original_price: Option<u64>,
    pub discounted_price: Option<u64>,
    pub source: MatchSource,
}

impl ResolvedItem {
    pub fn has_prices(&self) -> bool {
        self.original_price.is_some() && self.discounted_price.is_some()
    }
}

/// Robbery entry with its target vehicle resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRobbery {
    pub robbery: SalvageYardRobbery,
    pub vehicle: ResolvedItem,
}

/// Everything the home screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSummary {
    pub week_of: String,
    pub intro_messages: Vec<String>,
    pub weekly_challenge: String,
    pub podium_vehicle: ResolvedItem,
    pub prize_ride_vehicle: ResolvedItem,
    pub prize_ride_challenge: String,
    pub time_trial: String,
    pub premium_race: String,
    pub hsw_time_trial: String,
    pub salvage_yard_robberies: Vec<ResolvedRobbery>,
}

/// Loaded data plus any load failure, so screens can always render
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub weekly_update: Option<WeeklyUpdate>,
    pub vehicles: super::VehicleTable,
    pub properties: super::PropertyTable,
    pub error_message: Option<String>,
}

impl DashboardState {
    pub fn has_data(&self) -> bool {
        self.weekly_update.is_some()
    }
}
