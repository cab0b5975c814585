// Weekly screen command handlers - load the data, then resolve each screen
use super::settings::get_settings;
use crate::feed::TrackerApi;
use crate::models::{DashboardState, HomeSummary, ResolvedItem, Settings, WeeklyUpdate};
use crate::resolver::Resolver;
use crate::utils::get_data_dir;
use log::debug;
use serde::Serialize;

/// Resolved lines for the bonuses or discounts screen
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyItems {
    pub week_of: String,
    pub items: Vec<ResolvedItem>,
}

pub fn tracker_api(settings: &Settings) -> Result<TrackerApi, String> {
    TrackerApi::from_settings(settings, get_data_dir()).map_err(|e| e.to_string())
}

/// Load the weekly update and lookup tables with the current settings
pub fn load_dashboard() -> Result<(Settings, DashboardState), String> {
    let settings = get_settings()?;
    let state = tracker_api(&settings)?.load_dashboard();
    Ok((settings, state))
}

pub fn get_weekly_update() -> Result<WeeklyUpdate, String> {
    let (_, state) = load_dashboard()?;
    require_update(&state).cloned()
}

pub fn get_home_summary() -> Result<HomeSummary, String> {
    let (settings, state) = load_dashboard()?;
    home_summary(&settings, &state)
}

pub fn get_bonus_items() -> Result<WeeklyItems, String> {
    let (settings, state) = load_dashboard()?;
    bonus_items(&settings, &state)
}

pub fn get_discount_items() -> Result<WeeklyItems, String> {
    let (settings, state) = load_dashboard()?;
    discount_items(&settings, &state)
}

/// Resolve arbitrary lines against the loaded lookup tables.
/// Works even when the weekly update itself failed to load.
pub fn resolve_lines(lines: Vec<String>) -> Result<Vec<ResolvedItem>, String> {
    let (settings, state) = load_dashboard()?;
    Ok(resolver_for(&settings, &state).resolve(&lines))
}

pub fn home_summary(settings: &Settings, state: &DashboardState) -> Result<HomeSummary, String> {
    let update = require_update(state)?;
    Ok(resolver_for(settings, state).summarize_home(update))
}

pub fn bonus_items(settings: &Settings, state: &DashboardState) -> Result<WeeklyItems, String> {
    let update = require_update(state)?;
    let items = resolver_for(settings, state).resolve_bonuses(update);
    debug!("Resolved {} bonus lines", items.len());

    Ok(WeeklyItems {
        week_of: update.week_of.clone(),
        items,
    })
}

pub fn discount_items(settings: &Settings, state: &DashboardState) -> Result<WeeklyItems, String> {
    let update = require_update(state)?;
    let items = resolver_for(settings, state).resolve_discounts(update);
    debug!("Resolved {} discount lines", items.len());

    Ok(WeeklyItems {
        week_of: update.week_of.clone(),
        items,
    })
}

fn resolver_for<'a>(settings: &'a Settings, state: &'a DashboardState) -> Resolver<'a> {
    Resolver::new(Some(&state.vehicles), Some(&state.properties))
        .with_placeholder(&settings.placeholder_image_url)
}

fn require_update(state: &DashboardState) -> Result<&WeeklyUpdate, String> {
    state.weekly_update.as_ref().ok_or_else(|| {
        state
            .error_message
            .clone()
            .unwrap_or_else(|| "No weekly data loaded".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PropertyRecord, VehicleRecord};

    fn state() -> DashboardState {
        let mut update = WeeklyUpdate::empty("May 1 to May 8");
        update.bonuses = vec!["2X GTA$ - Eclipse Towers Heists".to_string()];
        update.discounts = vec![
            "30% Off: Cheval Taipan".to_string(),
            "30% Off: Eclipse Towers Apartment".to_string(),
        ];

        let mut state = DashboardState {
            weekly_update: Some(update),
            ..Default::default()
        };
        state.vehicles.insert(
            "Cheval Taipan".to_string(),
            VehicleRecord::new("taipan.jpg").with_prices(Some(1_980_000), Some(1_386_000)),
        );
        state
            .properties
            .insert("Eclipse Towers".to_string(), PropertyRecord::new("A", "B"));
        state
    }

    #[test]
    fn test_screens_resolve_independently() {
        let settings = Settings::default();
        let state = state();

        let bonuses = bonus_items(&settings, &state).unwrap();
        let discounts = discount_items(&settings, &state).unwrap();

        assert_eq!(bonuses.week_of, "May 1 to May 8");
        assert_eq!(bonuses.items[0].image_url, "A");
        // Separate pass, so the property counter starts over
        assert_eq!(discounts.items[1].image_url, "A");
        assert_eq!(discounts.items[0].discounted_price, Some(1_386_000));
    }

    #[test]
    fn test_missing_update_reports_error() {
        let state = DashboardState {
            error_message: Some("offline".to_string()),
            ..Default::default()
        };

        assert_eq!(bonus_items(&Settings::default(), &state).unwrap_err(), "offline");
        assert!(home_summary(&Settings::default(), &DashboardState::default()).is_err());
    }

    #[test]
    fn test_placeholder_from_settings() {
        let settings = Settings {
            placeholder_image_url: "none.png".to_string(),
            ..Settings::default()
        };
        let mut state = state();
        if let Some(update) = state.weekly_update.as_mut() {
            update.discounts = vec!["Free: Bunker Upgrades".to_string()];
        }

        let discounts = discount_items(&settings, &state).unwrap();
        assert_eq!(discounts.items[0].image_url, "none.png");
        assert_eq!(discounts.items[0].label.as_deref(), Some("Free"));
    }
}
