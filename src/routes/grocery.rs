use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::queries;
use crate::routes::mealplan::require_household;
use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct GroceryItemResponse {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub checked: bool,
    pub created_at: i64,
}

impl From<queries::GroceryItemRow> for GroceryItemResponse {
    fn from(row: queries::GroceryItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            category: row.category,
            checked: row.checked,
            created_at: row.created_at,
        }
    }
}

/// GET /api/households/{household_id}/grocery-list
pub async fn list_grocery_items(
    State(state): State<AppState>,
    Path(household_id): Path<String>,
) -> Result<Json<Vec<GroceryItemResponse>>, AppError> {
    require_household(&state, &household_id).await?;
    let rows = queries::list_grocery_items(&state.pool, &household_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub week: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub message: String,
    pub items_added: u64,
}

/// POST /api/households/{household_id}/grocery-list/generate
///
/// Aggregate the week's planned ingredients, diff them against the pantry
/// and the current list, and append whatever is still missing. Re-running is
/// harmless: everything added by a previous run is filtered back out.
pub async fn generate_grocery_list(
    State(state): State<AppState>,
    Path(household_id): Path<String>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let week = request.week.trim();
    if week.is_empty() {
        return Err(AppError::Validation("week is required".to_string()));
    }
    require_household(&state, &household_id).await?;

    let Some(plan) = queries::get_week_plan(&state.pool, &household_id, week).await? else {
        return Ok(Json(GenerateResponse {
            success: true,
            message: "No meal plan found for this week. Grocery list is empty.".to_string(),
            items_added: 0,
        }));
    };

    let pantry_names = queries::pantry_item_names(&state.pool, &household_id).await?;
    let listed_names = queries::grocery_item_names(&state.pool, &household_id).await?;

    let entries = mealweek_grocery::reconcile(&plan, &pantry_names, &listed_names);

    let items_added = if entries.is_empty() {
        0
    } else {
        queries::insert_grocery_items(
            &state.pool,
            &household_id,
            &entries,
            OffsetDateTime::now_utc(),
        )
        .await?
    };

    tracing::info!(
        household = %household_id,
        week = %week,
        items_added = items_added,
        "Grocery list generated"
    );

    Ok(Json(GenerateResponse {
        success: true,
        message: format!("Successfully added {items_added} new item(s) to your grocery list."),
        items_added,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub checked: bool,
}

/// POST /api/households/{household_id}/grocery-list/{item_id}/toggle
pub async fn toggle_grocery_item(
    State(state): State<AppState>,
    Path((household_id, item_id)): Path<(String, String)>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let updated =
        queries::set_grocery_item_checked(&state.pool, &household_id, &item_id, request.checked)
            .await?;
    if !updated {
        return Err(AppError::NotFound("Grocery item"));
    }
    Ok(Json(json!({ "success": true })))
}

/// DELETE /api/households/{household_id}/grocery-list/{item_id}
pub async fn delete_grocery_item(
    State(state): State<AppState>,
    Path((household_id, item_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = queries::delete_grocery_item(&state.pool, &household_id, &item_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Grocery item"));
    }
    Ok(Json(json!({ "success": true })))
}
