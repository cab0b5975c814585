// Vehicle lookup table models
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Image and price record for one vehicle, keyed by vehicle name in `VehicleTable`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Empty when the scraper found no image
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(default)]
    pub original_price: Option<u64>,
    #[serde(default)]
    pub discounted_price: Option<u64>,
    /// Where the vehicle appeared (e.g. "Podium Vehicle", "Discount")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Catalog page the record was taken from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u32>,
    #[serde(default)]
    pub is_free: bool,
    /// Raw discount line the record was built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
}

impl VehicleRecord {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            ..Default::default()
        }
    }

    pub fn with_prices(mut self, original: Option<u64>, discounted: Option<u64>) -> Self {
        self.original_price = original;
        self.discounted_price = discounted;
        self
    }

    pub fn formatted_original_price(&self) -> String {
        self.original_price
            .map(format_price)
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn formatted_discounted_price(&self) -> String {
        if self.is_free {
            return "FREE".to_string();
        }
        self.discounted_price
            .map(format_price)
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// `null` image fields load as an empty string so one bad record keeps the table usable
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Vehicle name -> record, in document order
pub type VehicleTable = IndexMap<String, VehicleRecord>;

/// Format a whole-dollar amount as `$1,234,567`
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
