use mealweek_grocery::DemandEntry;
use sqlx::SqlitePool;
use time::OffsetDateTime;
use uuid::Uuid;

/// Grocery list item row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GroceryItemRow {
    pub id: String,
    pub household_id: String,
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub checked: bool,
    pub created_at: i64,
}

pub async fn list_grocery_items(
    pool: &SqlitePool,
    household_id: &str,
) -> Result<Vec<GroceryItemRow>, sqlx::Error> {
    sqlx::query_as::<_, GroceryItemRow>(
        "SELECT * FROM grocery_items WHERE household_id = ? ORDER BY created_at, name",
    )
    .bind(household_id)
    .fetch_all(pool)
    .await
}

/// Raw grocery item names for inventory diffing; the aggregation engine
/// normalizes them on receipt.
pub async fn grocery_item_names(
    pool: &SqlitePool,
    household_id: &str,
) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM grocery_items WHERE household_id = ?")
            .bind(household_id)
            .fetch_all(pool)
            .await?;
    Ok(rows.into_iter().map(|(name,)| name).collect())
}

/// Commit reconciled demand entries as new list items, assigning ids and the
/// creation timestamp. Callers skip the call entirely for an empty batch.
pub async fn insert_grocery_items(
    pool: &SqlitePool,
    household_id: &str,
    entries: &[DemandEntry],
    now: OffsetDateTime,
) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    for entry in entries {
        sqlx::query(
            "INSERT INTO grocery_items (id, household_id, name, quantity, category, checked, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(household_id)
        .bind(&entry.name)
        .bind(&entry.quantity)
        .bind(entry.category.as_ref())
        .bind(entry.checked)
        .bind(now.unix_timestamp())
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    Ok(entries.len() as u64)
}

pub async fn set_grocery_item_checked(
    pool: &SqlitePool,
    household_id: &str,
    item_id: &str,
    checked: bool,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE grocery_items SET checked = ? WHERE id = ? AND household_id = ?")
        .bind(checked)
        .bind(item_id)
        .bind(household_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn delete_grocery_item(
    pool: &SqlitePool,
    household_id: &str,
    item_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM grocery_items WHERE id = ? AND household_id = ?")
        .bind(item_id)
        .bind(household_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
