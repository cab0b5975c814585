// Vehicle catalog slugs (gtacars.net page names)
use regex::Regex;

pub const CATALOG_BASE_URL: &str = "https://gtacars.net/gta5/";

/// Vehicles whose catalog slug is not their lowercased model name
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("Rhino Tank", "rhino"),
    ("Dashound", "coach"),
    ("Declasse Vigero ZX", "vigero2"),
    ("Obey Omnis e-GT", "omnisegt"),
    ("Albany Cavalcade XL", "cavalcade3"),
    ("Vapid Dominator FX", "dominator10"),
];

lazy_static::lazy_static! {
    static ref OFF_PREFIX_RE: Regex = Regex::new(r"\d+%\s+Off:\s+").expect("valid discount prefix regex");
}

/// `"Cheval Taipan"` -> `"taipan"`; the last word of the model name, lowercased
pub fn normalize_vehicle_name(vehicle_name: &str) -> String {
    if let Some((_, slug)) = SPECIAL_CASES.iter().find(|(name, _)| *name == vehicle_name) {
        return slug.to_string();
    }

    let name = OFF_PREFIX_RE.replace_all(vehicle_name, "");
    let name = name.trim();

    match name.split_whitespace().last() {
        Some(model) if name.split_whitespace().count() >= 2 => model.to_lowercase(),
        _ => name.to_lowercase(),
    }
}

pub fn catalog_url(slug: &str) -> String {
    format!("{}{}", CATALOG_BASE_URL, slug)
}
