//! Per-user date windows for weekly stats.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::errors::StatsError;

pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Half-open `[start, end)` range for one user. `end` is the day after the
/// requested last day, so entries at any time on that day are included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsWindow {
    pub username: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

fn parse_day(raw: &str) -> Result<NaiveDate, StatsError> {
    NaiveDate::parse_from_str(raw, DAY_FORMAT)
        .map_err(|_| StatsError::InvalidDateFormat(raw.to_string()))
}

fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

impl StatsWindow {
    /// Build a window from `YYYY-MM-DD` strings, `last_day` inclusive.
    pub fn from_days(username: &str, first_day: &str, last_day: &str) -> Result<Self, StatsError> {
        let start = parse_day(first_day)?;
        let end = parse_day(last_day)?
            .succ_opt()
            .ok_or_else(|| StatsError::InvalidDateFormat(last_day.to_string()))?;

        Ok(Self {
            username: username.to_string(),
            start: midnight(start),
            end: midnight(end),
        })
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_single_day_window_covers_whole_day() {
        let window = StatsWindow::from_days("alice", "2024-01-01", "2024-01-01").unwrap();

        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
        assert!(window.contains(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        assert!(window.contains(Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap()));
    }

    #[test]
    fn test_end_rolls_over_month_and_year() {
        let window = StatsWindow::from_days("alice", "2024-12-25", "2024-12-31").unwrap();
        assert_eq!(window.end, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_rejects_other_formats() {
        for bad in ["01/01/2024", "2024-01-01T00:00:00", "", "2024-02-30"] {
            assert!(
                matches!(
                    StatsWindow::from_days("alice", bad, "2024-01-07"),
                    Err(StatsError::InvalidDateFormat(_))
                ),
                "{bad:?} should be rejected"
            );
        }
        assert!(StatsWindow::from_days("alice", "2024-01-01", "next week").is_err());
    }
}
