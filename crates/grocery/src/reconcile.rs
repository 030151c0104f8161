//! Weekly demand aggregation and inventory diffing.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use mealweek_mealplan::WeekPlan;
use mealweek_shared::Category;
use serde::{Deserialize, Serialize};

use crate::{merge, normalize};

/// Names that never go on a grocery list, however often a plan calls for
/// them. Keys are canonical (post-normalization).
const NEVER_LISTED: &[&str] = &[
    "water",
    "salt",
    "pepper",
    "black pepper",
    "salt and pepper",
    "cooking spray",
];

/// Aggregated need for one ingredient across a week's plan.
///
/// `name` is the canonical key; `quantity` is the merged quantity text
/// (possibly empty). New entries start unchecked; the storage layer assigns
/// ids and timestamps when it commits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandEntry {
    pub name: String,
    pub quantity: String,
    pub category: Category,
    pub checked: bool,
}

/// Diff a weekly plan against current inventory and produce the net-new
/// grocery entries.
///
/// Every ingredient occurrence in the plan is normalized and folded into a
/// demand map (quantities merged, category fixed by first appearance), then
/// entries already covered by the pantry or the existing grocery list are
/// suppressed. Both inventory lists are normalized here on receipt, so
/// callers may pass raw item names.
///
/// A missing or empty plan produces an empty list; that is a normal outcome,
/// not an error. Pure function: no I/O, no shared state.
pub fn reconcile(
    plan: &WeekPlan,
    pantry_names: &[String],
    grocery_names: &[String],
) -> Vec<DemandEntry> {
    let mut demand: HashMap<String, DemandEntry> = HashMap::new();

    for (_, _, _, recipe) in plan.entries() {
        for ingredient in &recipe.ingredients {
            let Some(occurrence) = ingredient.occurrence() else {
                continue;
            };
            let key = normalize(&occurrence.name);
            if key.is_empty() || NEVER_LISTED.contains(&key.as_str()) {
                continue;
            }
            match demand.entry(key) {
                Entry::Occupied(mut occupied) => {
                    let entry = occupied.get_mut();
                    entry.quantity = merge(&entry.quantity, &occurrence.quantity);
                }
                Entry::Vacant(vacant) => {
                    let name = vacant.key().clone();
                    vacant.insert(DemandEntry {
                        name,
                        quantity: occurrence.quantity,
                        category: occurrence.category,
                        checked: false,
                    });
                }
            }
        }
    }

    let owned: HashSet<String> = pantry_names
        .iter()
        .chain(grocery_names)
        .map(|name| normalize(name))
        .collect();

    let mut entries: Vec<DemandEntry> = demand
        .into_values()
        .filter(|entry| !owned.contains(&entry.name))
        .collect();

    // Sort by name for stable output; the map itself has no order.
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(json: &str) -> WeekPlan {
        serde_json::from_str(json).unwrap()
    }

    fn week_with(ingredients_by_recipe: &[&str]) -> WeekPlan {
        let recipes: Vec<String> = ingredients_by_recipe
            .iter()
            .enumerate()
            .map(|(index, ingredients)| {
                format!(r#""meal_{index}": {{"title": "r{index}", "ingredients": {ingredients}}}"#)
            })
            .collect();
        plan(&format!(
            r#"{{"meals": {{"mon": {{"dinner": {{{}}}}}}}}}"#,
            recipes.join(",")
        ))
    }

    #[test]
    fn test_same_ingredient_across_recipes_merges_quantities() {
        let plan = week_with(&[
            r#"[{"name": "Flour", "quantity": 1, "unit": "cup", "category": "Pantry Staples"}]"#,
            r#"[{"name": "flour", "quantity": 2, "unit": "cup"}]"#,
        ]);
        let entries = reconcile(&plan, &[], &[]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "flour");
        assert_eq!(entries[0].quantity, "3 cup");
        // First-seen category wins; the second occurrence's Other is ignored.
        assert_eq!(entries[0].category, Category::PantryStaples);
        assert!(!entries[0].checked);
    }

    #[test]
    fn test_excluded_staples_never_appear() {
        let plan = week_with(&[
            r#"[{"name": "Water", "quantity": 2, "unit": "cup"}, {"name": "Salt and Pepper"}, "cooking spray", {"name": "chicken", "quantity": 1, "unit": "lb", "category": "Meat & Seafood"}]"#,
        ]);
        let entries = reconcile(&plan, &[], &[]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "chicken");
    }

    #[test]
    fn test_pantry_and_existing_list_suppress_entries() {
        let plan = week_with(&[
            r#"[{"name": "Onions", "quantity": 2, "unit": "item", "category": "Produce"},
                {"name": "Milk", "quantity": 1, "unit": "cup", "category": "Dairy & Eggs"},
                {"name": "Bread", "quantity": 1, "unit": "item"}]"#,
        ]);
        // Raw (unnormalized) inventory names must still match.
        let pantry = vec!["Onion".to_string()];
        let listed = vec!["bread".to_string()];
        let entries = reconcile(&plan, &pantry, &listed);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "milk");
    }

    #[test]
    fn test_empty_plan_yields_no_entries() {
        assert!(reconcile(&WeekPlan::default(), &[], &[]).is_empty());
        let empty = plan(r#"{"meals": {}}"#);
        assert!(reconcile(&empty, &[], &[]).is_empty());
    }

    #[test]
    fn test_names_dissolving_to_nothing_are_dropped() {
        let plan = week_with(&[r#"["fresh", {"name": "  "}]"#]);
        assert!(reconcile(&plan, &[], &[]).is_empty());
    }

    #[test]
    fn test_legacy_strings_count_as_items() {
        let plan = week_with(&[r#"["avocados"]"#, r#"["2 avocados"]"#]);
        let entries = reconcile(&plan, &[], &[]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "avocado");
        assert_eq!(entries[0].quantity, "2 items");
        assert_eq!(entries[0].category, Category::Other);
    }

    #[test]
    fn test_output_is_sorted_by_name() {
        let plan = week_with(&[
            r#"[{"name": "zucchini", "quantity": 1, "unit": "item"},
                {"name": "apple", "quantity": 3, "unit": "item"},
                {"name": "milk", "quantity": 1, "unit": "cup"}]"#,
        ]);
        let names: Vec<_> = reconcile(&plan, &[], &[])
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["apple", "milk", "zucchini"]);
    }

    #[test]
    fn test_incompatible_quantities_are_listed_side_by_side() {
        let plan = week_with(&[
            r#"[{"name": "butter", "quantity": 1, "unit": "cup"}]"#,
            r#"[{"name": "butter", "quantity": 2, "unit": "tbsp"}]"#,
        ]);
        let entries = reconcile(&plan, &[], &[]);
        assert_eq!(entries[0].quantity, "1 cup & 2 tbsp");
    }
}
