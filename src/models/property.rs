// Property lookup table models
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Two alternative marketing images for one property
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(default, deserialize_with = "super::vehicle::null_as_empty")]
    pub image1: String,
    #[serde(default, deserialize_with = "super::vehicle::null_as_empty")]
    pub image2: String,
}

impl PropertyRecord {
    pub fn new(image1: impl Into<String>, image2: impl Into<String>) -> Self {
        Self {
            image1: image1.into(),
            image2: image2.into(),
        }
    }

    /// Image for the n-th occurrence of this property (1-based).
    /// Occurrences past the last alternate, and empty alternates, fall back to `image1`.
    pub fn image_for_occurrence(&self, occurrence: usize) -> Option<&str> {
        let chosen = match occurrence {
            2 => self.image2.as_str(),
            _ => self.image1.as_str(),
        };

        if !chosen.is_empty() {
            Some(chosen)
        } else if !self.image1.is_empty() {
            Some(self.image1.as_str())
        } else {
            None
        }
    }
}

/// Property name -> record, in document order
pub type PropertyTable = IndexMap<String, PropertyRecord>;
