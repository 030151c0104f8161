use axum::{
    extract::{Path, State},
    Json,
};
use mealweek_household::{FREE_SCAN_LIMIT, QuotaDecision};
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::queries;
use crate::routes::mealplan::require_household;
use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct ScanQuotaResponse {
    pub allowed: bool,
    pub premium: bool,
    pub limit: u32,
    /// None for premium households - scans are not counted for them.
    pub remaining: Option<u32>,
}

/// GET /api/households/{household_id}/scan-quota
///
/// Current scan allowance. Premium households are always allowed and never
/// counted.
pub async fn get_scan_quota(
    State(state): State<AppState>,
    Path(household_id): Path<String>,
) -> Result<Json<ScanQuotaResponse>, AppError> {
    let row = require_household(&state, &household_id).await?;
    let now = OffsetDateTime::now_utc();

    if state.bypass_premium || row.subscription().is_premium(now) {
        return Ok(Json(ScanQuotaResponse {
            allowed: true,
            premium: true,
            limit: FREE_SCAN_LIMIT,
            remaining: None,
        }));
    }

    let usage = row.scan_usage();
    Ok(Json(ScanQuotaResponse {
        allowed: matches!(usage.check(now), QuotaDecision::Allowed),
        premium: false,
        limit: FREE_SCAN_LIMIT,
        remaining: Some(usage.remaining(now)),
    }))
}

/// POST /api/households/{household_id}/scan-quota/record
///
/// Count one completed scan against the household's monthly quota. The scan
/// pipeline calls this after a successful scan; premium households are a
/// no-op. Rejects with 422 when the quota is already spent.
pub async fn record_scan(
    State(state): State<AppState>,
    Path(household_id): Path<String>,
) -> Result<Json<ScanQuotaResponse>, AppError> {
    let row = require_household(&state, &household_id).await?;
    let now = OffsetDateTime::now_utc();

    if state.bypass_premium || row.subscription().is_premium(now) {
        return Ok(Json(ScanQuotaResponse {
            allowed: true,
            premium: true,
            limit: FREE_SCAN_LIMIT,
            remaining: None,
        }));
    }

    let usage = row.scan_usage();
    if let QuotaDecision::Exhausted { limit } = usage.check(now) {
        return Err(AppError::Validation(format!(
            "You have used all {limit} of your free scans for the month."
        )));
    }

    let updated = usage.record(now);
    queries::update_scan_usage(&state.pool, &household_id, updated).await?;
    tracing::info!(
        household = %household_id,
        count = updated.count,
        "Scan recorded against quota"
    );

    Ok(Json(ScanQuotaResponse {
        allowed: matches!(updated.check(now), QuotaDecision::Allowed),
        premium: false,
        limit: FREE_SCAN_LIMIT,
        remaining: Some(updated.remaining(now)),
    }))
}
