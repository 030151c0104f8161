use axum::{
    extract::{Path, State},
    Json,
};
use mealweek_household::SubscriptionStatus;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::queries;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateHouseholdRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct HouseholdResponse {
    pub id: String,
    pub name: String,
    pub subscription_tier: String,
    pub premium: bool,
    pub created_at: i64,
}

/// POST /api/households - Create a household
pub async fn create_household(
    State(state): State<AppState>,
    Json(request): Json<CreateHouseholdRequest>,
) -> Result<Json<HouseholdResponse>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Household name is required".to_string()));
    }

    let now = OffsetDateTime::now_utc();
    let row = queries::create_household(&state.pool, name, now).await?;
    tracing::info!(household = %row.id, "Household created");

    Ok(Json(to_response(row, now, state.bypass_premium)))
}

/// GET /api/households/{household_id}
pub async fn get_household(
    State(state): State<AppState>,
    Path(household_id): Path<String>,
) -> Result<Json<HouseholdResponse>, AppError> {
    let row = queries::get_household(&state.pool, &household_id)
        .await?
        .ok_or(AppError::NotFound("Household"))?;
    Ok(Json(to_response(
        row,
        OffsetDateTime::now_utc(),
        state.bypass_premium,
    )))
}

/// POST /api/households/{household_id}/trial - Grant a 30-day premium trial
///
/// Manual grant for beta testers; expiry demotes the household back to the
/// free tier on its own.
pub async fn grant_trial(
    State(state): State<AppState>,
    Path(household_id): Path<String>,
) -> Result<Json<HouseholdResponse>, AppError> {
    queries::get_household(&state.pool, &household_id)
        .await?
        .ok_or(AppError::NotFound("Household"))?;

    let now = OffsetDateTime::now_utc();
    let status = SubscriptionStatus::trial(now);
    queries::set_subscription(&state.pool, &household_id, status).await?;
    tracing::info!(household = %household_id, "Premium trial granted");

    let row = queries::get_household(&state.pool, &household_id)
        .await?
        .ok_or(AppError::NotFound("Household"))?;
    Ok(Json(to_response(row, now, state.bypass_premium)))
}

fn to_response(
    row: queries::HouseholdRow,
    now: OffsetDateTime,
    bypass_premium: bool,
) -> HouseholdResponse {
    let premium = bypass_premium || row.subscription().is_premium(now);
    HouseholdResponse {
        premium,
        subscription_tier: row.subscription_tier.clone(),
        id: row.id,
        name: row.name,
        created_at: row.created_at,
    }
}
