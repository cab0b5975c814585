use std::path::PathBuf;

use weekly_tracker_lib::feed::{DataSource, HttpClient, TrackerApi};
use weekly_tracker_lib::models::{MatchSource, DEFAULT_IMAGE};
use weekly_tracker_lib::{resolve, PropertyTable, Resolver, VehicleTable, WeeklyUpdate};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

fn load() -> (WeeklyUpdate, VehicleTable, PropertyTable) {
    (
        serde_json::from_str(&fixture("weekly-update.json")).unwrap(),
        serde_json::from_str(&fixture("vehicle_data.json")).unwrap(),
        serde_json::from_str(&fixture("property_images.json")).unwrap(),
    )
}

#[test]
fn discounts_resolve_in_order_with_property_alternates() {
    let (update, vehicles, properties) = load();
    let items = Resolver::new(Some(&vehicles), Some(&properties)).resolve_discounts(&update);

    assert_eq!(items.len(), update.discounts.len());
    for (item, line) in items.iter().zip(&update.discounts) {
        assert_eq!(&item.source_text, line);
    }

    let images: Vec<&str> = items.iter().map(|i| i.image_url.as_str()).collect();
    assert_eq!(
        images,
        vec![
            "https://img.example/taipan.jpg",
            "https://img.example/eclipse-1.jpg",
            "https://img.example/eclipse-2.jpg",
            "https://img.example/eclipse-1.jpg",
            "https://img.example/bunker-1.jpg",
            "https://img.example/pariah.jpg",
        ]
    );

    // Only the first ": " splits
    assert_eq!(items[2].label.as_deref(), Some("40% Off"));
    assert_eq!(items[2].name, "Eclipse Towers Penthouse: Suite 3");

    assert_eq!(items[0].original_price, Some(1_980_000));
    assert_eq!(items[0].discounted_price, Some(1_386_000));
    assert_eq!(items[5].original_price, Some(100_000));
    assert_eq!(items[5].discounted_price, Some(75_000));
    assert_eq!(items[4].original_price, None);
}

#[test]
fn bonuses_are_a_separate_pass() {
    let (update, vehicles, properties) = load();
    let resolver = Resolver::new(Some(&vehicles), Some(&properties));

    let bonuses = resolver.resolve_bonuses(&update);
    let discounts = resolver.resolve_discounts(&update);

    assert_eq!(bonuses[0].image_url, DEFAULT_IMAGE);
    assert_eq!(bonuses[0].source, MatchSource::Unmatched);
    assert_eq!(bonuses[1].image_url, "https://img.example/eclipse-1.jpg");
    assert_eq!(discounts[1].image_url, "https://img.example/eclipse-1.jpg");
}

#[test]
fn single_line_resolution_is_repeatable() {
    let (_, vehicles, properties) = load();
    let lines = ["40% Off: Eclipse Towers Apartment 31"];

    let first = resolve(&lines, Some(&vehicles), Some(&properties));
    let second = resolve(&lines, Some(&vehicles), Some(&properties));

    assert_eq!(first, second);
}

#[test]
fn concurrent_passes_do_not_share_counters() {
    let (update, vehicles, properties) = load();
    let resolver = Resolver::new(Some(&vehicles), Some(&properties));
    let expected = resolver.resolve_discounts(&update);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| resolver.resolve_discounts(&update)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn home_summary_from_bundled_files() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let api = TrackerApi::new(DataSource::Local(dir), HttpClient::new("test", 1));
    let state = api.load_dashboard();

    let update = state.weekly_update.as_ref().unwrap();
    let summary = Resolver::new(Some(&state.vehicles), Some(&state.properties)).summarize_home(update);

    assert_eq!(summary.week_of, "May 1 to May 8");
    assert_eq!(summary.podium_vehicle.image_url, "https://img.example/toros.jpg");
    assert_eq!(summary.prize_ride_vehicle.image_url, "https://img.example/taipan.jpg");
    assert_eq!(summary.salvage_yard_robberies[0].vehicle.image_url, DEFAULT_IMAGE);
}
