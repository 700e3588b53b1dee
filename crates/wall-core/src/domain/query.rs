use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Page size used when a list request does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Listing parameters: pagination plus an optional calendar-day filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostQuery {
    /// 1-based page number.
    pub page: u64,
    pub per_page: u64,
    /// Restrict results to posts created on this UTC day.
    pub day: Option<NaiveDate>,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            day: None,
        }
    }
}

impl PostQuery {
    /// Parse raw query-string values with deterministic fallbacks: anything
    /// absent, unparsable or non-positive becomes the default (page 1,
    /// [`DEFAULT_PAGE_SIZE`] per page, no day filter). A list request is
    /// never rejected over its parameters.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, date: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(1),
            per_page: parse_positive(limit).unwrap_or(DEFAULT_PAGE_SIZE),
            day: date.and_then(|raw| raw.trim().parse().ok()),
        }
    }

    /// Row offset of the first entry on this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// The UTC time window selected by the day filter, if any.
    pub fn window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.day.map(day_window)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
}

/// Half-open UTC interval `[00:00 of day, 00:00 of the next day)`.
///
/// A pure function of the date value, so "same day" never depends on how
/// the incoming string was formatted.
pub fn day_window(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}
