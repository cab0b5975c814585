//! Vehicle catalog planning
//! Works out which vehicles a weekly update mentions, where their catalog pages
//! live, and how their discounted prices follow from the listed percentage.

pub mod pricing;
pub mod slug;

pub use pricing::{calculate_discounted_price, parse_percent_off};
pub use slug::{catalog_url, normalize_vehicle_name, CATALOG_BASE_URL};

use crate::models::{VehicleRecord, WeeklyUpdate, NOT_FOUND};
use log::debug;
use serde::Serialize;

/// Discount lines naming these are not vehicles
const NON_VEHICLE_MARKERS: &[&str] = &["Properties", "Upgrades", "Modifications", "Offices"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleLookup {
    pub name: String,
    /// "Podium Vehicle", "Prize Ride Vehicle", the robbery type, or "Discount"
    pub kind: String,
    pub slug: String,
    pub url: String,
    pub discount_percent: Option<u32>,
    pub discount: Option<String>,
}

impl VehicleLookup {
    fn new(name: &str, kind: &str) -> Self {
        let slug = normalize_vehicle_name(name);
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            url: catalog_url(&slug),
            slug,
            discount_percent: None,
            discount: None,
        }
    }

    /// Build the vehicle table record once the catalog image and price are known
    pub fn into_record(self, image_url: String, original_price: Option<u64>) -> VehicleRecord {
        let discounted_price = match (original_price, self.discount_percent) {
            (Some(price), Some(percent)) => Some(calculate_discounted_price(price, percent)),
            _ => None,
        };

        VehicleRecord {
            image_url,
            original_price,
            discounted_price,
            kind: Some(self.kind),
            url: Some(self.url),
            slug: Some(self.slug),
            discount_percent: self.discount_percent,
            is_free: false,
            discount: self.discount,
        }
    }
}

pub fn is_non_vehicle(name: &str) -> bool {
    NON_VEHICLE_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Every vehicle the update references: podium, prize ride, robbery targets,
/// then percent-off discounts. Later entries for the same name replace earlier ones.
pub fn plan_lookups(update: &WeeklyUpdate) -> Vec<VehicleLookup> {
    let mut lookups: Vec<VehicleLookup> = Vec::new();

    let mut push = |lookup: VehicleLookup| {
        match lookups.iter_mut().find(|existing| existing.name == lookup.name) {
            Some(existing) => *existing = lookup,
            None => lookups.push(lookup),
        }
    };

    for (name, kind) in [
        (&update.podium_vehicle, "Podium Vehicle"),
        (&update.prize_ride_vehicle, "Prize Ride Vehicle"),
    ] {
        if is_known(name) {
            push(VehicleLookup::new(name, kind));
        }
    }

    for robbery in &update.salvage_yard_robberies {
        if is_known(&robbery.vehicle) {
            push(VehicleLookup::new(&robbery.vehicle, &robbery.kind));
        }
    }

    for discount in &update.discounts {
        let Some((percent, name)) = parse_percent_off(discount) else {
            continue;
        };

        if is_non_vehicle(name) {
            debug!("Skipping non-vehicle: {}", name);
            continue;
        }

        let mut lookup = VehicleLookup::new(name, "Discount");
        lookup.discount_percent = Some(percent);
        lookup.discount = Some(discount.clone());
        push(lookup);
    }

    lookups
}

fn is_known(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && name != NOT_FOUND
}
