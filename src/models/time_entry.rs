//! Time entry model.
//!
//! A [`TimeEntry`] is one logged work session or leave day, as produced by
//! the timer/attendance layer. The engine consumes entries; it never owns
//! or mutates them. Soft-deleted entries must be filtered out by the caller
//! before they reach the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The type of leave recorded on a leave entry.
///
/// Sick and vacation leave are paid; everything else is unpaid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    /// Paid sick leave.
    Sick,
    /// Paid vacation leave.
    Vacation,
    /// Unpaid personal leave.
    Personal,
    /// Explicitly unpaid leave.
    Unpaid,
}

impl LeaveType {
    /// Whether this leave type is paid.
    pub fn is_paid(self) -> bool {
        matches!(self, LeaveType::Sick | LeaveType::Vacation)
    }
}

/// Leave information attached to a time entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEntry {
    /// Whether the entry represents a leave day rather than worked time.
    pub is_leave: bool,
    /// The type of leave taken.
    pub leave_type: LeaveType,
}

/// One logged work session or leave day.
///
/// `time_in`/`time_out` are wall-clock strings in `"HH:mm"` format; the
/// engine compares them lexically, which is ordering-correct for that
/// format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// Clock-in time in `"HH:mm"` format, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in: Option<String>,
    /// Clock-out time in `"HH:mm"` format, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_out: Option<String>,
    /// Total hours logged on this entry.
    #[serde(default)]
    pub total_hours: Decimal,
    /// Earnings already attributed to this entry by the timer layer.
    #[serde(default)]
    pub total_earnings: Decimal,
    /// Leave marker, when the entry records leave instead of work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave: Option<LeaveEntry>,
}

impl TimeEntry {
    /// Whether this entry is flagged as a leave day.
    pub fn is_leave(&self) -> bool {
        self.leave.is_some_and(|l| l.is_leave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// TE-001: sick and vacation leave are paid
    #[test]
    fn test_paid_leave_types() {
        assert!(LeaveType::Sick.is_paid());
        assert!(LeaveType::Vacation.is_paid());
        assert!(!LeaveType::Personal.is_paid());
        assert!(!LeaveType::Unpaid.is_paid());
    }

    /// TE-002: leave flag only when is_leave is set
    #[test]
    fn test_is_leave_requires_flag() {
        let worked = TimeEntry {
            date: make_date("2024-01-15"),
            time_in: Some("09:00".to_string()),
            time_out: Some("17:00".to_string()),
            total_hours: dec("8"),
            total_earnings: Decimal::ZERO,
            leave: None,
        };
        assert!(!worked.is_leave());

        let on_leave = TimeEntry {
            leave: Some(LeaveEntry {
                is_leave: true,
                leave_type: LeaveType::Sick,
            }),
            ..worked.clone()
        };
        assert!(on_leave.is_leave());

        let flag_unset = TimeEntry {
            leave: Some(LeaveEntry {
                is_leave: false,
                leave_type: LeaveType::Sick,
            }),
            ..worked
        };
        assert!(!flag_unset.is_leave());
    }

    #[test]
    fn test_leave_type_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&LeaveType::Sick).unwrap(), "\"Sick\"");
        assert_eq!(
            serde_json::to_string(&LeaveType::Vacation).unwrap(),
            "\"Vacation\""
        );
    }

    #[test]
    fn test_deserialize_minimal_entry() {
        let json = r#"{"date": "2024-01-15"}"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.total_hours, Decimal::ZERO);
        assert_eq!(entry.time_in, None);
        assert!(!entry.is_leave());
    }

    #[test]
    fn test_deserialize_leave_entry() {
        let json = r#"{
            "date": "2024-01-15",
            "leave": {"is_leave": true, "leave_type": "Vacation"}
        }"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_leave());
        assert_eq!(entry.leave.unwrap().leave_type, LeaveType::Vacation);
    }
}
