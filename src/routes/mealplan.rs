use axum::{
    extract::{Path, State},
    Json,
};
use mealweek_mealplan::WeekPlan;
use serde_json::json;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::queries;
use crate::routes::AppState;

/// GET /api/households/{household_id}/plans/{week}
///
/// Returns the stored plan document, or an empty plan when none exists for
/// the week - "no plan" is a normal state, not an error.
pub async fn get_week_plan(
    State(state): State<AppState>,
    Path((household_id, week)): Path<(String, String)>,
) -> Result<Json<WeekPlan>, AppError> {
    require_household(&state, &household_id).await?;
    let plan = queries::get_week_plan(&state.pool, &household_id, &week)
        .await?
        .unwrap_or_default();
    Ok(Json(plan))
}

/// PUT /api/households/{household_id}/plans/{week}
pub async fn put_week_plan(
    State(state): State<AppState>,
    Path((household_id, week)): Path<(String, String)>,
    Json(plan): Json<WeekPlan>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_household(&state, &household_id).await?;
    queries::upsert_week_plan(
        &state.pool,
        &household_id,
        &week,
        &plan,
        OffsetDateTime::now_utc(),
    )
    .await?;
    tracing::info!(household = %household_id, week = %week, "Meal plan saved");
    Ok(Json(json!({ "success": true })))
}

pub(crate) async fn require_household(
    state: &AppState,
    household_id: &str,
) -> Result<queries::HouseholdRow, AppError> {
    queries::get_household(&state.pool, household_id)
        .await?
        .ok_or(AppError::NotFound("Household"))
}
