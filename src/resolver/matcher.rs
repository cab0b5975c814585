// Line splitting and table lookups used by the resolver
use crate::models::{PropertyRecord, PropertyTable, VehicleRecord, VehicleTable};

/// Split `"<label>: <name>"` on the first `": "` only.
/// Lines without the separator have no label and the whole line is the name.
pub fn split_line(line: &str) -> (Option<&str>, &str) {
    match line.split_once(": ") {
        Some((label, name)) => (Some(label.trim()), name.trim()),
        None => (None, line.trim()),
    }
}

/// Exact key match on `name` first, then the first key (table order)
/// contained case-insensitively in the line.
pub fn find_vehicle<'t>(
    table: &'t VehicleTable,
    name: &str,
    line_lower: &str,
) -> Option<(&'t str, &'t VehicleRecord)> {
    if let Some((key, record)) = table.get_key_value(name) {
        if !key.is_empty() {
            return Some((key.as_str(), record));
        }
    }

    table
        .iter()
        .find(|(key, _)| contains_key(line_lower, key))
        .map(|(key, record)| (key.as_str(), record))
}

/// First property key (table order) contained case-insensitively in the line
pub fn find_property<'t>(
    table: &'t PropertyTable,
    line_lower: &str,
) -> Option<(&'t str, &'t PropertyRecord)> {
    table
        .iter()
        .find(|(key, _)| contains_key(line_lower, key))
        .map(|(key, record)| (key.as_str(), record))
}

// Blank keys would match every line
fn contains_key(line_lower: &str, key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && line_lower.contains(&key.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_line() {
        assert_eq!(split_line("30% Off: Cheval Taipan"), (Some("30% Off"), "Cheval Taipan"));
        assert_eq!(split_line("Free: Bunker: Upgrades: All"), (Some("Free"), "Bunker: Upgrades: All"));
        assert_eq!(split_line("3X GTA$ and RP - Stunt Races"), (None, "3X GTA$ and RP - Stunt Races"));
        // A colon without a following space is not a separator
        assert_eq!(split_line("Time:Trial"), (None, "Time:Trial"));
    }

    #[test]
    fn test_find_vehicle_prefers_exact_name() {
        let mut table = VehicleTable::new();
        table.insert("Taipan".to_string(), VehicleRecord::new("short"));
        table.insert("Cheval Taipan".to_string(), VehicleRecord::new("full"));

        let (key, record) = find_vehicle(&table, "Cheval Taipan", "30% off: cheval taipan").unwrap();
        assert_eq!(key, "Cheval Taipan");
        assert_eq!(record.image_url, "full");

        let (key, _) = find_vehicle(&table, "The Cheval Taipan", "the cheval taipan").unwrap();
        assert_eq!(key, "Taipan");
    }

    #[test]
    fn test_find_property_first_key_in_table_order() {
        let mut table = PropertyTable::new();
        table.insert("Towers".to_string(), PropertyRecord::new("T1", "T2"));
        table.insert("Eclipse Towers".to_string(), PropertyRecord::new("E1", "E2"));

        let (key, record) = find_property(&table, "40% off: eclipse towers apartment 31").unwrap();
        assert_eq!(key, "Towers");
        assert_eq!(record.image1, "T1");

        let mut reordered = PropertyTable::new();
        reordered.insert("Eclipse Towers".to_string(), PropertyRecord::new("E1", "E2"));
        reordered.insert("Towers".to_string(), PropertyRecord::new("T1", "T2"));

        let (key, _) = find_property(&reordered, "40% off: eclipse towers apartment 31").unwrap();
        assert_eq!(key, "Eclipse Towers");
    }

    #[test]
    fn test_blank_keys_never_match() {
        let mut table = PropertyTable::new();
        table.insert("  ".to_string(), PropertyRecord::new("A", "B"));

        assert!(find_property(&table, "anything at all").is_none());
    }
}
