// Discount percentages and discounted price arithmetic
use regex::Regex;

lazy_static::lazy_static! {
    static ref PERCENT_OFF_RE: Regex = Regex::new(r"^(\d+)%\s+Off:\s+(.+)$").expect("valid percent-off regex");
}

/// `"30% Off: Cheval Taipan"` -> `(30, "Cheval Taipan")`
pub fn parse_percent_off(line: &str) -> Option<(u32, &str)> {
    let caps = PERCENT_OFF_RE.captures(line.trim())?;
    let percent = caps.get(1)?.as_str().parse().ok()?;
    let name = caps.get(2)?.as_str();
    Some((percent, name))
}

/// Price after taking `percent` off, truncated to whole dollars
pub fn calculate_discounted_price(original_price: u64, percent: u32) -> u64 {
    let percent = u128::from(percent.min(100));
    // The product can exceed u64; the quotient never does
    (u128::from(original_price) * (100 - percent) / 100) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent_off() {
        assert_eq!(
            parse_percent_off("30% Off: Cheval Taipan"),
            Some((30, "Cheval Taipan"))
        );
        assert_eq!(parse_percent_off("Free: Bunker Upgrades"), None);
        assert_eq!(parse_percent_off("30% Off Cheval Taipan"), None);
    }

    #[test]
    fn test_calculate_discounted_price() {
        assert_eq!(calculate_discounted_price(1_980_000, 30), 1_386_000);
        assert_eq!(calculate_discounted_price(999, 50), 499);
        assert_eq!(calculate_discounted_price(100_000, 0), 100_000);
        assert_eq!(calculate_discounted_price(100_000, 150), 0);
    }

    #[test]
    fn test_discounted_price_near_u64_max() {
        assert_eq!(calculate_discounted_price(u64::MAX, 0), u64::MAX);
        assert_eq!(calculate_discounted_price(u64::MAX, 100), 0);
        assert_eq!(calculate_discounted_price(u64::MAX / 10, 30), 1_291_272_085_159_668_612);
        assert!(calculate_discounted_price(u64::MAX, 1) < u64::MAX);
    }
}
