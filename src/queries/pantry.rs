use mealweek_shared::Category;
use sqlx::SqlitePool;
use time::OffsetDateTime;
use uuid::Uuid;

/// Pantry item row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PantryItemRow {
    pub id: String,
    pub household_id: String,
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub category: String,
    pub created_at: i64,
}

pub async fn list_pantry_items(
    pool: &SqlitePool,
    household_id: &str,
) -> Result<Vec<PantryItemRow>, sqlx::Error> {
    sqlx::query_as::<_, PantryItemRow>(
        "SELECT * FROM pantry_items WHERE household_id = ? ORDER BY category, name",
    )
    .bind(household_id)
    .fetch_all(pool)
    .await
}

/// Raw pantry names for inventory diffing; the aggregation engine
/// normalizes them on receipt.
pub async fn pantry_item_names(
    pool: &SqlitePool,
    household_id: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM pantry_items WHERE household_id = ?")
            .bind(household_id)
            .fetch_all(pool)
            .await?;
    Ok(rows.into_iter().map(|(name,)| name).collect())
}

pub async fn insert_pantry_item(
    pool: &SqlitePool,
    household_id: &str,
    name: &str,
    quantity: &str,
    unit: &str,
    category: Category,
    now: OffsetDateTime,
) -> Result<PantryItemRow, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    sqlx::query(
        "INSERT INTO pantry_items (id, household_id, name, quantity, unit, category, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(household_id)
    .bind(name)
    .bind(quantity)
    .bind(unit)
    .bind(category.as_ref())
    .bind(now.unix_timestamp())
    .execute(pool)
    .await?;

    Ok(PantryItemRow {
        id,
        household_id: household_id.to_string(),
        name: name.to_string(),
        quantity: quantity.to_string(),
        unit: unit.to_string(),
        category: category.to_string(),
        created_at: now.unix_timestamp(),
    })
}

pub async fn delete_pantry_item(
    pool: &SqlitePool,
    household_id: &str,
    item_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM pantry_items WHERE id = ? AND household_id = ?")
        .bind(item_id)
        .bind(household_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
