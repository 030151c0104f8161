use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use mealweek_mealplan::{plan_events, to_ics, MealEvent};
use mealweek_shared::{start_of_week, week_id};
use serde::Deserialize;
use time::{Duration, OffsetDateTime};

use crate::error::AppError;
use crate::queries;
use crate::routes::AppState;

/// Weeks covered by the feed: the current week plus the next four.
const FEED_WEEKS: usize = 5;

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    #[serde(rename = "householdId")]
    pub household_id: Option<String>,
}

/// GET /calendar?householdId=... - iCalendar feed of planned meals
///
/// Subscribable from calendar apps, so this endpoint speaks text/calendar
/// rather than JSON and is cacheable for an hour.
pub async fn calendar_feed(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, AppError> {
    let Some(household_id) = query.household_id.filter(|id| !id.trim().is_empty()) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            "Missing required query parameter: householdId",
        )
            .into_response());
    };

    let now = OffsetDateTime::now_utc();
    let mut events: Vec<MealEvent> = Vec::new();

    // Week ids come from the stepped date itself, not its Sunday: ISO weeks
    // end on Sunday, so the two disagree on Sundays and plan documents are
    // keyed the way the clients key them.
    for offset in 0..FEED_WEEKS {
        let target = now.date() + Duration::weeks(offset as i64);
        let week = week_id(target);
        let week_start = start_of_week(target);
        if let Some(plan) = queries::get_week_plan(&state.pool, &household_id, &week).await? {
            events.extend(plan_events(&week, week_start, &plan));
        }
    }

    let ics = to_ics(&events, now);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/calendar"),
            (
                header::CACHE_CONTROL,
                "s-maxage=3600, stale-while-revalidate",
            ),
        ],
        ics,
    )
        .into_response())
}
