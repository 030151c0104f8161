/// End-to-end grocery list generation through the HTTP layer: plan in the
/// database, pantry filtering, merged quantities out.
mod common;

use axum::http::StatusCode;
use common::{create_household, create_test_app, request_json, setup_test_db};
use serde_json::json;

fn week_plan() -> serde_json::Value {
    json!({
        "meals": {
            "mon": {
                "breakfast": {
                    "meal_1": {
                        "title": "Pancakes",
                        "ingredients": [
                            {"name": "Flour", "quantity": 1, "unit": "cup", "category": "Pantry Staples"},
                            {"name": "Water", "quantity": 2, "unit": "cup"},
                            {"name": "Onions", "quantity": 1, "unit": "item", "category": "Produce"}
                        ]
                    }
                }
            },
            "thu": {
                "dinner": {
                    "meal_2": {
                        "title": "Biscuits",
                        "ingredients": [
                            {"name": "flour", "quantity": 2, "unit": "cup", "category": "Pantry Staples"}
                        ]
                    }
                }
            }
        }
    })
}

#[tokio::test]
async fn test_generate_merges_filters_and_persists() {
    let pool = setup_test_db().await;
    let app = create_test_app(pool);
    let household = create_household(&app).await;

    // Store the plan and stock the pantry with onions (raw plural name; the
    // engine normalizes it).
    let (status, _) = request_json(
        &app,
        "PUT",
        &format!("/api/households/{household}/plans/2026-W32"),
        Some(week_plan()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request_json(
        &app,
        "POST",
        &format!("/api/households/{household}/pantry"),
        Some(json!({"name": "Onions", "quantity": "3", "unit": "item", "category": "Produce"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = request_json(
        &app,
        "POST",
        &format!("/api/households/{household}/grocery-list/generate"),
        Some(json!({"week": "2026-W32"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["items_added"], json!(1));
    assert_eq!(
        body["message"],
        json!("Successfully added 1 new item(s) to your grocery list.")
    );

    // Water is excluded, onion is in the pantry; only flour lands, merged.
    let (status, items) = request_json(
        &app,
        "GET",
        &format!("/api/households/{household}/grocery-list"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], json!("flour"));
    assert_eq!(items[0]["quantity"], json!("3 cup"));
    assert_eq!(items[0]["category"], json!("Pantry Staples"));
    assert_eq!(items[0]["checked"], json!(false));
    assert!(items[0]["created_at"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_regenerating_adds_nothing_new() {
    let pool = setup_test_db().await;
    let app = create_test_app(pool);
    let household = create_household(&app).await;

    request_json(
        &app,
        "PUT",
        &format!("/api/households/{household}/plans/2026-W32"),
        Some(week_plan()),
    )
    .await;

    let generate_uri = format!("/api/households/{household}/grocery-list/generate");
    let (_, first) = request_json(&app, "POST", &generate_uri, Some(json!({"week": "2026-W32"}))).await;
    assert_eq!(first["items_added"], json!(2)); // flour + onion, no pantry this time

    let (_, second) =
        request_json(&app, "POST", &generate_uri, Some(json!({"week": "2026-W32"}))).await;
    assert_eq!(second["items_added"], json!(0));
}

#[tokio::test]
async fn test_generate_without_plan_reports_empty_list() {
    let pool = setup_test_db().await;
    let app = create_test_app(pool);
    let household = create_household(&app).await;

    let (status, body) = request_json(
        &app,
        "POST",
        &format!("/api/households/{household}/grocery-list/generate"),
        Some(json!({"week": "2026-W01"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items_added"], json!(0));
    assert_eq!(
        body["message"],
        json!("No meal plan found for this week. Grocery list is empty.")
    );
}

#[tokio::test]
async fn test_generate_requires_week_and_household() {
    let pool = setup_test_db().await;
    let app = create_test_app(pool);
    let household = create_household(&app).await;

    let (status, _) = request_json(
        &app,
        "POST",
        &format!("/api/households/{household}/grocery-list/generate"),
        Some(json!({"week": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = request_json(
        &app,
        "POST",
        "/api/households/missing/grocery-list/generate",
        Some(json!({"week": "2026-W32"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_and_delete_grocery_items() {
    let pool = setup_test_db().await;
    let app = create_test_app(pool);
    let household = create_household(&app).await;

    request_json(
        &app,
        "PUT",
        &format!("/api/households/{household}/plans/2026-W32"),
        Some(week_plan()),
    )
    .await;
    request_json(
        &app,
        "POST",
        &format!("/api/households/{household}/grocery-list/generate"),
        Some(json!({"week": "2026-W32"})),
    )
    .await;

    let (_, items) = request_json(
        &app,
        "GET",
        &format!("/api/households/{household}/grocery-list"),
        None,
    )
    .await;
    let item_id = items[0]["id"].as_str().unwrap().to_string();

    let (status, _) = request_json(
        &app,
        "POST",
        &format!("/api/households/{household}/grocery-list/{item_id}/toggle"),
        Some(json!({"checked": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, items) = request_json(
        &app,
        "GET",
        &format!("/api/households/{household}/grocery-list"),
        None,
    )
    .await;
    assert_eq!(items[0]["checked"], json!(true));

    let (status, _) = request_json(
        &app,
        "DELETE",
        &format!("/api/households/{household}/grocery-list/{item_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = request_json(
        &app,
        "DELETE",
        &format!("/api/households/{household}/grocery-list/{item_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
