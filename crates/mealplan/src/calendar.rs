use time::{Date, Duration, OffsetDateTime};

use crate::WeekPlan;

pub const CALENDAR_NAME: &str = "Household Meal Plan";

/// One planned meal rendered as a calendar entry. Events last one hour and
/// carry no timezone (they are floating local times).
#[derive(Debug, Clone, PartialEq)]
pub struct MealEvent {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub date: Date,
    pub hour: u8,
}

/// Expand a week's plan into calendar events, one per meal entry.
///
/// `week_start` must be the Sunday the plan week begins on; `week_id` only
/// seeds the event UIDs so feeds regenerate stably.
pub fn plan_events(week_id: &str, week_start: Date, plan: &WeekPlan) -> Vec<MealEvent> {
    plan.entries()
        .map(|(day, slot, entry_id, recipe)| MealEvent {
            uid: format!("{week_id}-{day}-{slot}-{entry_id}@mealweek"),
            summary: format!("{}: {}", slot.title(), recipe.title),
            description: format!("Recipe: {}\n\n{}", recipe.title, recipe.description),
            date: week_start + Duration::days(day.offset_from_sunday() as i64),
            hour: slot.hour(),
        })
        .collect()
}

/// Render events as an iCalendar document (RFC 5545, CRLF line endings).
pub fn to_ics(events: &[MealEvent], generated_at: OffsetDateTime) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//mealweek//meal plan//EN".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(CALENDAR_NAME)),
    ];

    let stamp = format_utc_stamp(generated_at);
    for event in events {
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}", event.uid));
        lines.push(format!("DTSTAMP:{stamp}"));
        lines.push(format!(
            "DTSTART:{:04}{:02}{:02}T{:02}0000",
            event.date.year(),
            event.date.month() as u8,
            event.date.day(),
            event.hour,
        ));
        lines.push("DURATION:PT1H".to_string());
        lines.push(format!("SUMMARY:{}", escape_text(&event.summary)));
        lines.push(format!("DESCRIPTION:{}", escape_text(&event.description)));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    let mut ics = lines.join("\r\n");
    ics.push_str("\r\n");
    ics
}

fn format_utc_stamp(at: OffsetDateTime) -> String {
    let at = at.to_offset(time::UtcOffset::UTC);
    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}Z",
        at.year(),
        at.month() as u8,
        at.day(),
        at.hour(),
        at.minute(),
        at.second(),
    )
}

/// Escape TEXT property values: backslash, semicolon, comma, and newlines.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn sample_plan() -> WeekPlan {
        serde_json::from_str(
            r#"{
                "meals": {
                    "sun": {
                        "breakfast": {
                            "meal_a": {"title": "Pancakes", "description": "Fluffy."}
                        }
                    },
                    "wed": {
                        "dinner": {
                            "meal_b": {"title": "Chili, extra hot", "description": ""}
                        }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_plan_events_place_meals_on_the_right_day_and_hour() {
        let events = plan_events("2026-W32", date!(2026 - 08 - 02), &sample_plan());
        assert_eq!(events.len(), 2);

        assert_eq!(events[0].summary, "Breakfast: Pancakes");
        assert_eq!(events[0].date, date!(2026 - 08 - 02));
        assert_eq!(events[0].hour, 8);

        assert_eq!(events[1].summary, "Dinner: Chili, extra hot");
        assert_eq!(events[1].date, date!(2026 - 08 - 05));
        assert_eq!(events[1].hour, 19);
    }

    #[test]
    fn test_event_uids_are_stable_across_regeneration() {
        let first = plan_events("2026-W32", date!(2026 - 08 - 02), &sample_plan());
        let second = plan_events("2026-W32", date!(2026 - 08 - 02), &sample_plan());
        assert_eq!(first[0].uid, second[0].uid);
        assert_eq!(first[0].uid, "2026-W32-sun-breakfast-meal_a@mealweek");
    }

    #[test]
    fn test_ics_document_structure() {
        let events = plan_events("2026-W32", date!(2026 - 08 - 02), &sample_plan());
        let ics = to_ics(&events, datetime!(2026-08-01 12:00:00 UTC));

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("X-WR-CALNAME:Household Meal Plan"));
        assert!(ics.contains("DTSTART:20260802T080000"));
        assert!(ics.contains("DTSTAMP:20260801T120000Z"));
        assert!(ics.contains("DURATION:PT1H"));
    }

    #[test]
    fn test_ics_escapes_commas_and_newlines() {
        let events = plan_events("2026-W32", date!(2026 - 08 - 02), &sample_plan());
        let ics = to_ics(&events, datetime!(2026-08-01 12:00:00 UTC));

        assert!(ics.contains("SUMMARY:Dinner: Chili\\, extra hot"));
        assert!(ics.contains("DESCRIPTION:Recipe: Pancakes\\n\\nFluffy."));
    }

    #[test]
    fn test_empty_plan_renders_calendar_shell() {
        let ics = to_ics(&[], datetime!(2026-08-01 12:00:00 UTC));
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }
}
