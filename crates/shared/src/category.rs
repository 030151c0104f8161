use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Grocery store section an item is shelved under.
///
/// The display strings double as the wire format: plan documents and list
/// rows both carry them verbatim. Anything unrecognized lands in `Other`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
pub enum Category {
    Produce,
    #[strum(serialize = "Meat & Seafood")]
    #[serde(rename = "Meat & Seafood")]
    MeatAndSeafood,
    #[strum(serialize = "Dairy & Eggs")]
    #[serde(rename = "Dairy & Eggs")]
    DairyAndEggs,
    #[strum(serialize = "Pantry Staples")]
    #[serde(rename = "Pantry Staples")]
    PantryStaples,
    Frozen,
    #[default]
    Other,
}

impl Category {
    /// Parse a stored label, falling back to `Other` for anything unknown.
    pub fn parse_or_other(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

// Unknown labels must degrade to Other instead of rejecting the document,
// so deserialization goes through the same fallback as storage reads.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Category::parse_or_other(&label))
    }
}
