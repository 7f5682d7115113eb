//! Salary cycle model.
//!
//! This module contains the [`SalaryCycle`] type describing one inclusive
//! pay-period date range. Cycles are generated by the cycle calendar
//! utilities and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A pay period defined by inclusive start and end dates.
///
/// A cycle is not necessarily aligned to a calendar month: a payroll that
/// runs from the 19th to the 18th of the next month is a single cycle.
///
/// # Example
///
/// ```
/// use payslip_engine::models::SalaryCycle;
/// use chrono::NaiveDate;
///
/// let cycle = SalaryCycle::new(
///     NaiveDate::from_ymd_opt(2024, 1, 19).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 18).unwrap(),
/// ).unwrap();
///
/// assert_eq!(cycle.total_days(), 31);
/// assert!(cycle.contains_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCycle {
    /// The start date of the cycle (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the cycle (inclusive).
    pub end_date: NaiveDate,
}

impl SalaryCycle {
    /// Creates a new cycle, rejecting inverted date ranges.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidCycle {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this cycle.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the total number of days in the cycle, counting both ends.
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Iterates every date in the cycle in chronological order.
    pub fn iter_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// CY-001: single day cycle has one day
    #[test]
    fn test_single_day_cycle() {
        let cycle = SalaryCycle::new(make_date("2024-01-01"), make_date("2024-01-01")).unwrap();
        assert_eq!(cycle.total_days(), 1);
        assert_eq!(cycle.iter_dates().count(), 1);
    }

    /// CY-002: calendar month cycle counts every day
    #[test]
    fn test_calendar_month_total_days() {
        let cycle = SalaryCycle::new(make_date("2024-01-01"), make_date("2024-01-31")).unwrap();
        assert_eq!(cycle.total_days(), 31);
    }

    /// CY-003: inverted range is rejected
    #[test]
    fn test_inverted_range_rejected() {
        let result = SalaryCycle::new(make_date("2024-02-01"), make_date("2024-01-01"));
        assert!(matches!(
            result.unwrap_err(),
            EngineError::InvalidCycle { .. }
        ));
    }

    /// CY-004: contains_date is inclusive on both ends
    #[test]
    fn test_contains_date_inclusive() {
        let cycle = SalaryCycle::new(make_date("2024-01-19"), make_date("2024-02-18")).unwrap();
        assert!(cycle.contains_date(make_date("2024-01-19")));
        assert!(cycle.contains_date(make_date("2024-02-18")));
        assert!(!cycle.contains_date(make_date("2024-01-18")));
        assert!(!cycle.contains_date(make_date("2024-02-19")));
    }

    #[test]
    fn test_iter_dates_spans_month_boundary() {
        let cycle = SalaryCycle::new(make_date("2025-12-19"), make_date("2026-01-18")).unwrap();
        let dates: Vec<NaiveDate> = cycle.iter_dates().collect();
        assert_eq!(dates.len(), 31);
        assert_eq!(dates[0], make_date("2025-12-19"));
        assert_eq!(dates[30], make_date("2026-01-18"));
    }

    #[test]
    fn test_serialize_cycle_as_iso_dates() {
        let cycle = SalaryCycle::new(make_date("2024-01-19"), make_date("2024-02-18")).unwrap();
        let json = serde_json::to_string(&cycle).unwrap();
        assert!(json.contains("\"start_date\":\"2024-01-19\""));
        assert!(json.contains("\"end_date\":\"2024-02-18\""));
    }

    #[test]
    fn test_deserialize_cycle() {
        let json = r#"{"start_date":"2024-01-19","end_date":"2024-02-18"}"#;
        let cycle: SalaryCycle = serde_json::from_str(json).unwrap();
        assert_eq!(cycle.start_date, make_date("2024-01-19"));
        assert_eq!(cycle.end_date, make_date("2024-02-18"));
    }
}
