use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::routes::{
    add_pantry_item, calendar_feed, create_household, delete_grocery_item, delete_pantry_item,
    generate_grocery_list, get_household, get_scan_quota, get_week_plan, grant_trial, health,
    list_grocery_items, list_pantry_items, put_week_plan, ready, record_scan, toggle_grocery_item,
    AppState,
};

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health))
        .route("/ready", get(ready))
        // Calendar feed (text/calendar, household scoped by query parameter)
        .route("/calendar", get(calendar_feed))
        // Households
        .route("/api/households", post(create_household))
        .route("/api/households/{household_id}", get(get_household))
        .route("/api/households/{household_id}/trial", post(grant_trial))
        // Weekly meal plans
        .route(
            "/api/households/{household_id}/plans/{week}",
            get(get_week_plan).put(put_week_plan),
        )
        // Pantry
        .route(
            "/api/households/{household_id}/pantry",
            get(list_pantry_items).post(add_pantry_item),
        )
        .route(
            "/api/households/{household_id}/pantry/{item_id}",
            delete(delete_pantry_item),
        )
        // Grocery list
        .route(
            "/api/households/{household_id}/grocery-list",
            get(list_grocery_items),
        )
        .route(
            "/api/households/{household_id}/grocery-list/generate",
            post(generate_grocery_list),
        )
        .route(
            "/api/households/{household_id}/grocery-list/{item_id}/toggle",
            post(toggle_grocery_item),
        )
        .route(
            "/api/households/{household_id}/grocery-list/{item_id}",
            delete(delete_grocery_item),
        )
        // Scan quota
        .route(
            "/api/households/{household_id}/scan-quota",
            get(get_scan_quota),
        )
        .route(
            "/api/households/{household_id}/scan-quota/record",
            post(record_scan),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
