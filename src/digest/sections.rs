// Section extractors for the weekly digest post body
use super::markdown::{clean_text, field_value};
use crate::models::{SalvageYardRobbery, NOT_FOUND};
use regex::Regex;

pub const SEE_FULL_POST: &str = "See full post for details";

lazy_static::lazy_static! {
    static ref MULTIPLIER_RE: Regex = Regex::new(r"\d+X\s+[^*]+").expect("valid multiplier regex");
}

/// `"Weekly Bonuses and Discounts - May 1 to May 8"` -> `"May 1 to May 8"`
pub fn clean_title(title: &str) -> String {
    title.rsplit(" - ").next().unwrap_or(title).to_string()
}

/// `***bold italic***` lines before the first `#` header
pub fn extract_intro_messages(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with('#'))
        .filter(|line| line.starts_with("***") && line.ends_with("***"))
        .map(clean_text)
        .filter(|message| !message.is_empty())
        .collect()
}

/// First line mentioning `key_phrase` with a colon, reduced to its value
pub fn extract_field(body: &str, key_phrase: &str) -> String {
    body.lines()
        .find(|line| line.contains(key_phrase) && line.contains(':'))
        .map(field_value)
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

pub fn extract_salvage_yard_robberies(body: &str) -> Vec<SalvageYardRobbery> {
    let mut robberies = Vec::new();
    let mut capturing = false;

    for line in body.lines() {
        let stripped = line.trim();

        if stripped.contains("Salvage Yard Robberies") {
            capturing = true;
            continue;
        }

        if !capturing {
            continue;
        }

        if stripped.starts_with("**") && !stripped.contains("Robbery") {
            break;
        }

        if stripped.starts_with('*') && stripped.contains("Robbery:") {
            let text = clean_text(&stripped[1..]);
            if let Some((kind, vehicle)) = text.split_once(':') {
                robberies.push(SalvageYardRobbery {
                    kind: kind.trim().to_string(),
                    vehicle: vehicle.trim().to_string(),
                });
            }
        }
    }

    robberies
}

pub fn extract_weekly_challenge(body: &str) -> String {
    let mut capturing = false;

    for line in body.lines() {
        let stripped = line.trim();

        if stripped.contains("This Week's Challenge") {
            capturing = true;
            continue;
        }

        if !capturing {
            continue;
        }

        if stripped.starts_with("**") {
            break;
        }

        if let Some(rest) = stripped.strip_prefix('*') {
            return clean_text(rest);
        }
    }

    NOT_FOUND.to_string()
}

/// Bonus items under `# Bonuses`, each prefixed with its multiplier header
/// (`"4X GTA$ and RP - Item"`)
pub fn extract_bonuses(body: &str) -> Vec<String> {
    let mut bonuses = Vec::new();
    let mut current_multiplier: Option<String> = None;

    for stripped in section_lines(body, "# Bonuses") {
        if stripped.starts_with("**") && stripped.ends_with("**") {
            if MULTIPLIER_RE.is_match(stripped) {
                current_multiplier = Some(clean_text(stripped));
            }
            continue;
        }

        if let (Some(item), Some(multiplier)) = (stripped.strip_prefix('*'), &current_multiplier) {
            let item = clean_text(item);
            if !item.is_empty() {
                bonuses.push(format!("{} - {}", multiplier, item));
            }
        }
    }

    if bonuses.is_empty() {
        bonuses.push(SEE_FULL_POST.to_string());
    }
    bonuses
}

/// Discount items under `# Discounts` as `"<header>: <item>"` (`"30% Off: Cheval Taipan"`)
pub fn extract_discounts(body: &str) -> Vec<String> {
    let mut discounts = Vec::new();
    let mut current_discount: Option<String> = None;

    for stripped in section_lines(body, "# Discounts") {
        if stripped.starts_with("**") && (stripped.contains("Off") || stripped.contains("Free")) {
            current_discount = Some(clean_text(stripped));
            continue;
        }

        if let (Some(item), Some(discount)) = (stripped.strip_prefix('*'), &current_discount) {
            let item = clean_text(item);
            if !item.is_empty() {
                discounts.push(format!("{}: {}", discount, item));
            }
        }
    }

    if discounts.is_empty() {
        discounts.push(SEE_FULL_POST.to_string());
    }
    discounts
}

// Trimmed lines after `header` up to the next top-level `# ` header
fn section_lines<'b>(body: &'b str, header: &'b str) -> impl Iterator<Item = &'b str> {
    body.lines()
        .map(str::trim)
        .skip_while(move |line| !line.starts_with(header))
        .skip(1)
        .take_while(|line| !line.starts_with("# "))
}
