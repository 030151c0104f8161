use mealweek_household::{ScanUsage, SubscriptionStatus, SubscriptionTier};
use sqlx::SqlitePool;
use time::OffsetDateTime;
use uuid::Uuid;

/// Household row from the households table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HouseholdRow {
    pub id: String,
    pub name: String,
    pub subscription_tier: String,
    pub premium_until: Option<i64>,
    pub scan_count: i64,
    pub scan_reset_at: i64,
    pub created_at: i64,
}

impl HouseholdRow {
    pub fn subscription(&self) -> SubscriptionStatus {
        SubscriptionStatus {
            tier: self
                .subscription_tier
                .parse::<SubscriptionTier>()
                .unwrap_or_default(),
            premium_until: self
                .premium_until
                .and_then(|ts| OffsetDateTime::from_unix_timestamp(ts).ok()),
        }
    }

    pub fn scan_usage(&self) -> ScanUsage {
        ScanUsage {
            count: self.scan_count.max(0) as u32,
            reset_at: self.scan_reset_at,
        }
    }
}

pub async fn get_household(
    pool: &SqlitePool,
    household_id: &str,
) -> Result<Option<HouseholdRow>, sqlx::Error> {
    sqlx::query_as::<_, HouseholdRow>("SELECT * FROM households WHERE id = ?")
        .bind(household_id)
        .fetch_optional(pool)
        .await
}

pub async fn create_household(
    pool: &SqlitePool,
    name: &str,
    now: OffsetDateTime,
) -> Result<HouseholdRow, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
        "INSERT INTO households (id, name, subscription_tier, scan_count, scan_reset_at, created_at)
         VALUES (?, ?, 'free', 0, 0, ?)",
    )
    .bind(&id)
    .bind(name)
    .bind(now.unix_timestamp())
    .execute(pool)
    .await?;

    Ok(HouseholdRow {
        id,
        name: name.to_string(),
        subscription_tier: SubscriptionTier::Free.to_string(),
        premium_until: None,
        scan_count: 0,
        scan_reset_at: 0,
        created_at: now.unix_timestamp(),
    })
}

pub async fn update_scan_usage(
    pool: &SqlitePool,
    household_id: &str,
    usage: ScanUsage,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE households SET scan_count = ?, scan_reset_at = ? WHERE id = ?")
        .bind(usage.count as i64)
        .bind(usage.reset_at)
        .bind(household_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn set_subscription(
    pool: &SqlitePool,
    household_id: &str,
    status: SubscriptionStatus,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE households SET subscription_tier = ?, premium_until = ? WHERE id = ?")
        .bind(status.tier.to_string())
        .bind(status.premium_until.map(|at| at.unix_timestamp()))
        .bind(household_id)
        .execute(pool)
        .await?;
    Ok(())
}
