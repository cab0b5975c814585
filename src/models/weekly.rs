// Weekly update models (the digest payload shown on every screen)
use serde::{Deserialize, Serialize};

pub const NOT_FOUND: &str = "Not found";

/// One week of bonuses, discounts and featured content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyUpdate {
    pub week_of: String,
    #[serde(default)]
    pub intro_messages: Vec<String>,
    #[serde(default = "not_found")]
    pub podium_vehicle: String,
    #[serde(default = "not_found")]
    pub prize_ride_vehicle: String,
    #[serde(default = "not_found")]
    pub prize_ride_challenge: String,
    #[serde(default = "not_found")]
    pub time_trial: String,
    #[serde(default = "not_found")]
    pub premium_race: String,
    #[serde(default = "not_found")]
    pub hsw_time_trial: String,
    #[serde(default)]
    pub salvage_yard_robberies: Vec<SalvageYardRobbery>,
    #[serde(default = "not_found")]
    pub weekly_challenge: String,
    #[serde(default)]
    pub bonuses: Vec<String>,
    #[serde(default)]
    pub discounts: Vec<String>,
}

fn not_found() -> String {
    NOT_FOUND.to_string()
}

impl WeeklyUpdate {
    /// An update with only the week label set; every other field is empty or "Not found"
    pub fn empty(week_of: impl Into<String>) -> Self {
        Self {
            week_of: week_of.into(),
            intro_messages: Vec::new(),
            podium_vehicle: not_found(),
            prize_ride_vehicle: not_found(),
            prize_ride_challenge: not_found(),
            time_trial: not_found(),
            premium_race: not_found(),
            hsw_time_trial: not_found(),
            salvage_yard_robberies: Vec::new(),
            weekly_challenge: not_found(),
            bonuses: Vec::new(),
            discounts: Vec::new(),
        }
    }
}

/// Salvage yard robbery of the week (robbery type plus target vehicle)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalvageYardRobbery {
    #[serde(rename = "type")]
    pub kind: String,
    pub vehicle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload_fills_defaults() {
        let json = r#"{"weekOf": "May 1 to May 8", "bonuses": ["2X GTA$ - Races"], "discounts": []}"#;
        let update: WeeklyUpdate = serde_json::from_str(json).unwrap();

        assert_eq!(update.week_of, "May 1 to May 8");
        assert_eq!(update.bonuses, vec!["2X GTA$ - Races"]);
        assert_eq!(update.podium_vehicle, NOT_FOUND);
        assert!(update.salvage_yard_robberies.is_empty());
    }

    #[test]
    fn test_robbery_uses_type_key() {
        let json = r#"{"type": "The Cargo Ship Robbery", "vehicle": "Pegassi Toros"}"#;
        let robbery: SalvageYardRobbery = serde_json::from_str(json).unwrap();

        assert_eq!(robbery.kind, "The Cargo Ship Robbery");
        assert_eq!(robbery.vehicle, "Pegassi Toros");
        assert!(serde_json::to_string(&robbery).unwrap().contains("\"type\""));
    }
}
