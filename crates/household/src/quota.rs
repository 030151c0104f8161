use time::{Date, Month, OffsetDateTime};

/// Free-tier scans allowed per calendar month. Premium households bypass the
/// quota entirely and are never counted against it.
pub const FREE_SCAN_LIMIT: u32 = 20;

/// Monthly scan counter as persisted per household.
///
/// `reset_at` is the Unix timestamp after which the count no longer applies.
/// A zero value (the stored default) means the window has long expired, so
/// fresh households always start from an effective count of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanUsage {
    pub count: u32,
    pub reset_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
    Allowed,
    Exhausted { limit: u32 },
}

impl ScanUsage {
    /// Whether another scan is allowed at `now`. Pure: no clock is read and
    /// nothing is mutated.
    pub fn check(&self, now: OffsetDateTime) -> QuotaDecision {
        let effective = if now.unix_timestamp() > self.reset_at {
            0
        } else {
            self.count
        };
        if effective >= FREE_SCAN_LIMIT {
            QuotaDecision::Exhausted {
                limit: FREE_SCAN_LIMIT,
            }
        } else {
            QuotaDecision::Allowed
        }
    }

    /// Scans left in the current window.
    pub fn remaining(&self, now: OffsetDateTime) -> u32 {
        let effective = if now.unix_timestamp() > self.reset_at {
            0
        } else {
            self.count
        };
        FREE_SCAN_LIMIT.saturating_sub(effective)
    }

    /// Count one completed scan, rolling the window to the first of the next
    /// month when the previous window has lapsed.
    pub fn record(&self, now: OffsetDateTime) -> ScanUsage {
        if now.unix_timestamp() > self.reset_at {
            ScanUsage {
                count: 1,
                reset_at: first_of_next_month(now.date())
                    .midnight()
                    .assume_utc()
                    .unix_timestamp(),
            }
        } else {
            ScanUsage {
                count: self.count + 1,
                reset_at: self.reset_at,
            }
        }
    }
}

fn first_of_next_month(date: Date) -> Date {
    let (year, month) = match date.month() {
        Month::December => (date.year() + 1, Month::January),
        other => (date.year(), other.next()),
    };
    // Day 1 exists in every month.
    Date::from_calendar_date(year, month, 1).expect("first of month")
}
