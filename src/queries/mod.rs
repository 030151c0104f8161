//! Storage queries over the SQLite read/write tables.

pub mod grocery;
pub mod household;
pub mod mealplan;
pub mod pantry;

pub use grocery::{
    delete_grocery_item, grocery_item_names, insert_grocery_items, list_grocery_items,
    set_grocery_item_checked, GroceryItemRow,
};
pub use household::{
    create_household, get_household, set_subscription, update_scan_usage, HouseholdRow,
};
pub use mealplan::{get_week_plan, upsert_week_plan};
pub use pantry::{
    delete_pantry_item, insert_pantry_item, list_pantry_items, pantry_item_names, PantryItemRow,
};
