use std::collections::BTreeMap;

use mealweek_recipe::Recipe;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Day keys of a plan week, Sunday first to match the week layout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Day {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Day {
    /// Offset from the week's Sunday, 0..=6.
    pub fn offset_from_sunday(&self) -> u8 {
        *self as u8
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Wall-clock hour the slot's calendar event starts at.
    pub fn hour(&self) -> u8 {
        match self {
            MealSlot::Breakfast => 8,
            MealSlot::Lunch => 13,
            MealSlot::Dinner => 19,
        }
    }

    /// Capitalized label for event titles.
    pub fn title(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

/// One week of planned meals: day → slot → meal-entry id → recipe.
///
/// Entry ids are opaque client-generated strings (`"meal_1700000000"`).
/// BTreeMaps keep traversal deterministic, which pins down which occurrence
/// of an ingredient counts as "first seen" during aggregation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekPlan {
    #[serde(default)]
    pub meals: BTreeMap<Day, BTreeMap<MealSlot, BTreeMap<String, Recipe>>>,
}

impl WeekPlan {
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// Every planned meal entry in day/slot/id order.
    pub fn entries(&self) -> impl Iterator<Item = (Day, MealSlot, &str, &Recipe)> + '_ {
        self.meals.iter().flat_map(|(day, slots)| {
            slots.iter().flat_map(move |(slot, entries)| {
                entries
                    .iter()
                    .map(move |(id, recipe)| (*day, *slot, id.as_str(), recipe))
            })
        })
    }
}
