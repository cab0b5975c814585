//! Text-to-asset resolution
//! Maps free-text bonus/discount lines to an image and optional prices using the
//! vehicle and property lookup tables. Resolution never fails: anything that
//! does not match gets the placeholder image and no prices.

mod counter;
mod matcher;

pub use counter::OccurrenceCounter;
pub use matcher::{find_property, find_vehicle, split_line};

use crate::models::{
    HomeSummary, MatchSource, PropertyTable, ResolvedItem, ResolvedRobbery, VehicleTable,
    WeeklyUpdate, DEFAULT_IMAGE,
};
use log::debug;

/// Borrowed lookup tables plus the placeholder image.
/// Holds no pass state, so one `Resolver` can serve any number of passes.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    vehicles: Option<&'a VehicleTable>,
    properties: Option<&'a PropertyTable>,
    placeholder: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(vehicles: Option<&'a VehicleTable>, properties: Option<&'a PropertyTable>) -> Self {
        Self {
            vehicles,
            properties,
            placeholder: DEFAULT_IMAGE,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// One resolution pass: output is 1:1 with `lines` and in the same order
    pub fn resolve<S: AsRef<str>>(&self, lines: &[S]) -> Vec<ResolvedItem> {
        let mut counter = OccurrenceCounter::new();
        lines
            .iter()
            .map(|line| self.resolve_line(line.as_ref(), &mut counter))
            .collect()
    }

    fn resolve_line(&self, line: &str, counter: &mut OccurrenceCounter) -> ResolvedItem {
        let (label, name) = split_line(line);
        let line_lower = line.to_lowercase();

        if let Some((key, record)) = self.vehicles.and_then(|t| find_vehicle(t, name, &line_lower)) {
            return ResolvedItem {
                source_text: line.to_string(),
                label: label.map(str::to_string),
                name: name.to_string(),
                image_url: self.image_or_placeholder(&record.image_url),
                original_price: record.original_price,
                discounted_price: record.discounted_price,
                source: MatchSource::Vehicle { key: key.to_string() },
            };
        }

        if let Some((key, record)) = self.properties.and_then(|t| find_property(t, &line_lower)) {
            let occurrence = counter.next(key);
            let image_url = record
                .image_for_occurrence(occurrence)
                .unwrap_or(self.placeholder)
                .to_string();

            return ResolvedItem {
                source_text: line.to_string(),
                label: label.map(str::to_string),
                name: name.to_string(),
                image_url,
                original_price: None,
                discounted_price: None,
                source: MatchSource::Property {
                    key: key.to_string(),
                    occurrence,
                },
            };
        }

        debug!("No image match for line: {}", line);
        self.unmatched(line, label, name)
    }

    /// Resolve a single featured vehicle name (podium, prize ride, robbery target).
    /// Only the vehicle table is consulted.
    pub fn resolve_vehicle(&self, name: &str) -> ResolvedItem {
        let name = name.trim();
        let name_lower = name.to_lowercase();

        match self.vehicles.and_then(|t| find_vehicle(t, name, &name_lower)) {
            Some((key, record)) => ResolvedItem {
                source_text: name.to_string(),
                label: None,
                name: name.to_string(),
                image_url: self.image_or_placeholder(&record.image_url),
                original_price: record.original_price,
                discounted_price: record.discounted_price,
                source: MatchSource::Vehicle { key: key.to_string() },
            },
            None => self.unmatched(name, None, name),
        }
    }

    pub fn resolve_bonuses(&self, update: &WeeklyUpdate) -> Vec<ResolvedItem> {
        self.resolve(&update.bonuses)
    }

    pub fn resolve_discounts(&self, update: &WeeklyUpdate) -> Vec<ResolvedItem> {
        self.resolve(&update.discounts)
    }

    pub fn summarize_home(&self, update: &WeeklyUpdate) -> HomeSummary {
        HomeSummary {
            week_of: update.week_of.clone(),
            intro_messages: update.intro_messages.clone(),
            weekly_challenge: update.weekly_challenge.clone(),
            podium_vehicle: self.resolve_vehicle(&update.podium_vehicle),
            prize_ride_vehicle: self.resolve_vehicle(&update.prize_ride_vehicle),
            prize_ride_challenge: update.prize_ride_challenge.clone(),
            time_trial: update.time_trial.clone(),
            premium_race: update.premium_race.clone(),
            hsw_time_trial: update.hsw_time_trial.clone(),
            salvage_yard_robberies: update
                .salvage_yard_robberies
                .iter()
                .map(|robbery| ResolvedRobbery {
                    robbery: robbery.clone(),
                    vehicle: self.resolve_vehicle(&robbery.vehicle),
                })
                .collect(),
        }
    }

    fn image_or_placeholder(&self, image_url: &str) -> String {
        if image_url.trim().is_empty() {
            self.placeholder.to_string()
        } else {
            image_url.to_string()
        }
    }

    fn unmatched(&self, line: &str, label: Option<&str>, name: &str) -> ResolvedItem {
        ResolvedItem {
            source_text: line.to_string(),
            label: label.map(str::to_string),
            name: name.to_string(),
            image_url: self.placeholder.to_string(),
            original_price: None,
            discounted_price: None,
            source: MatchSource::Unmatched,
        }
    }
}

/// Resolve `lines` against the tables with the built-in placeholder image
pub fn resolve<S: AsRef<str>>(
    lines: &[S],
    vehicles: Option<&VehicleTable>,
    properties: Option<&PropertyTable>,
) -> Vec<ResolvedItem> {
    Resolver::new(vehicles, properties).resolve(lines)
}
