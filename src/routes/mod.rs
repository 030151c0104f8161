//! HTTP route handlers.

pub mod calendar;
pub mod grocery;
pub mod health;
pub mod households;
pub mod mealplan;
pub mod pantry;
pub mod quota;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Treat every household as premium (see FeatureConfig).
    pub bypass_premium: bool,
}

pub use calendar::calendar_feed;
pub use grocery::{
    delete_grocery_item, generate_grocery_list, list_grocery_items, toggle_grocery_item,
};
pub use health::{health, ready};
pub use households::{create_household, get_household, grant_trial};
pub use mealplan::{get_week_plan, put_week_plan};
pub use pantry::{add_pantry_item, delete_pantry_item, list_pantry_items};
pub use quota::{get_scan_quota, record_scan};
