use mealweek_mealplan::WeekPlan;
use sqlx::SqlitePool;
use time::OffsetDateTime;

use crate::error::AppError;

/// Load the stored plan document for one household week, if any.
pub async fn get_week_plan(
    pool: &SqlitePool,
    household_id: &str,
    week: &str,
) -> Result<Option<WeekPlan>, AppError> {
    let document: Option<(String,)> = sqlx::query_as(
        "SELECT document FROM meal_plans WHERE household_id = ? AND week = ?",
    )
    .bind(household_id)
    .bind(week)
    .fetch_optional(pool)
    .await?;

    match document {
        Some((json,)) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

pub async fn upsert_week_plan(
    pool: &SqlitePool,
    household_id: &str,
    week: &str,
    plan: &WeekPlan,
    now: OffsetDateTime,
) -> Result<(), AppError> {
    let document = serde_json::to_string(plan)?;
    sqlx::query(
        "INSERT INTO meal_plans (household_id, week, document, updated_at)
         VALUES (?, ?, ?, ?)
         ON CONFLICT (household_id, week)
         DO UPDATE SET document = excluded.document, updated_at = excluded.updated_at",
    )
    .bind(household_id)
    .bind(week)
    .bind(document)
    .bind(now.unix_timestamp())
    .execute(pool)
    .await?;
    Ok(())
}
