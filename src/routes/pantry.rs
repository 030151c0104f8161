use axum::{
    extract::{Path, State},
    Json,
};
use mealweek_shared::Category;
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::queries;
use crate::routes::mealplan::require_household;
use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct PantryItemResponse {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: String,
    pub created_at: i64,
}

impl From<queries::PantryItemRow> for PantryItemResponse {
    fn from(row: queries::PantryItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            quantity: row.quantity,
            unit: row.unit,
            category: row.category,
            created_at: row.created_at,
        }
    }
}

/// GET /api/households/{household_id}/pantry
pub async fn list_pantry_items(
    State(state): State<AppState>,
    Path(household_id): Path<String>,
) -> Result<Json<Vec<PantryItemResponse>>, AppError> {
    require_household(&state, &household_id).await?;
    let rows = queries::list_pantry_items(&state.pool, &household_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct AddPantryItemRequest {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: Option<Category>,
}

/// POST /api/households/{household_id}/pantry
pub async fn add_pantry_item(
    State(state): State<AppState>,
    Path(household_id): Path<String>,
    Json(request): Json<AddPantryItemRequest>,
) -> Result<Json<PantryItemResponse>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Item name is required".to_string()));
    }
    require_household(&state, &household_id).await?;

    let row = queries::insert_pantry_item(
        &state.pool,
        &household_id,
        name,
        request.quantity.trim(),
        request.unit.trim(),
        request.category.unwrap_or_default(),
        OffsetDateTime::now_utc(),
    )
    .await?;

    Ok(Json(row.into()))
}

/// DELETE /api/households/{household_id}/pantry/{item_id}
pub async fn delete_pantry_item(
    State(state): State<AppState>,
    Path((household_id, item_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = queries::delete_pantry_item(&state.pool, &household_id, &item_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Pantry item"));
    }
    Ok(Json(json!({ "success": true })))
}
