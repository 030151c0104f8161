use mealweek_shared::Category;
use serde::{Deserialize, Serialize};

/// Ingredient as it appears inside a stored recipe document.
///
/// Two generations of documents exist: structured objects with quantity,
/// unit, and category, and legacy bare strings. Anything else (a number, an
/// object without a name) is preserved on round-trip but contributes nothing
/// to aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientSpec {
    Detailed(IngredientDetail),
    Name(String),
    Unrecognized(serde_json::Value),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientDetail {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<Amount>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
}

/// Quantity field as stored: generated recipes write numbers, imported ones
/// write free text like `"1/2"` or `"a pinch"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

/// One ingredient use, reduced to the single internal shape the aggregation
/// engine consumes. `quantity` is empty when the document carried none.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    pub name: String,
    pub quantity: String,
    pub category: Category,
}

impl IngredientSpec {
    /// Resolve this ingredient into an [`Occurrence`], or `None` for shapes
    /// that cannot be interpreted (these are skipped, not errors).
    ///
    /// Legacy bare strings count as one item of an uncategorized ingredient,
    /// with any leading quantity text stripped off the name.
    pub fn occurrence(&self) -> Option<Occurrence> {
        match self {
            IngredientSpec::Detailed(detail) if !detail.name.trim().is_empty() => {
                Some(Occurrence {
                    name: detail.name.clone(),
                    quantity: detail.quantity_text(),
                    category: detail.category.unwrap_or_default(),
                })
            }
            IngredientSpec::Name(name) if !name.trim().is_empty() => Some(Occurrence {
                name: strip_quantity_prefix(name),
                quantity: "1 item".to_string(),
                category: Category::Other,
            }),
            _ => None,
        }
    }
}

impl IngredientDetail {
    /// Join quantity and unit into the free-text quantity string the merger
    /// operates on, e.g. `"1.5 cups"`. Empty when both fields are absent.
    pub fn quantity_text(&self) -> String {
        let amount = match &self.quantity {
            Some(Amount::Number(value)) => format_number(*value),
            Some(Amount::Text(text)) => text.trim().to_string(),
            None => String::new(),
        };
        let unit = self.unit.as_deref().unwrap_or("").trim();
        format!("{amount} {unit}").trim().to_string()
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Unit tokens that may trail a numeric prefix in legacy bare-string names.
const PREFIX_UNITS: &[&str] = &["cups", "cup", "tbsps", "tbsp", "lbs", "lb", "oz", "kg", "g"];

/// Drop a leading quantity from a legacy bare-string name, so `"2 lbs ground
/// beef"` yields `"ground beef"`. Names without a numeric prefix pass through
/// untouched.
fn strip_quantity_prefix(raw: &str) -> String {
    let rest = raw.trim_start_matches(|c: char| {
        c.is_ascii_digit() || c == '.' || c == '/' || c.is_whitespace()
    });
    if rest.len() == raw.len() {
        return raw.trim().to_string();
    }
    for unit in PREFIX_UNITS {
        if let Some(after) = strip_token_prefix(rest, unit) {
            return after.trim().to_string();
        }
    }
    rest.trim().to_string()
}

/// Strip `token` only when it ends the string or is followed by whitespace,
/// so the `g` of `"garlic"` is not mistaken for grams.
fn strip_token_prefix<'a>(text: &'a str, token: &str) -> Option<&'a str> {
    let rest = text
        .get(..token.len())
        .filter(|head| head.eq_ignore_ascii_case(token))
        .map(|_| &text[token.len()..])?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}
