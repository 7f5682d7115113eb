//! Assembled payslip models.
//!
//! This module contains the [`PayslipData`] type and its nested structures
//! that capture the complete output of an entry-driven payslip calculation:
//! period info, attendance counts, earnings breakdown, deductions breakdown,
//! and the net summary. Every monetary field is rounded to two decimals by
//! the assembler before these values are constructed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pay period information on a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInfo {
    /// The cycle start date (inclusive).
    pub start_date: NaiveDate,
    /// The cycle end date (inclusive).
    pub end_date: NaiveDate,
    /// Total calendar days in the cycle.
    pub total_days: i64,
    /// Working days in the cycle (half days count as 0.5).
    pub working_days: Decimal,
    /// Weekly off days in the cycle.
    pub weekly_offs: u32,
}

/// Attendance counts for the pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Working dates with at least one non-leave entry.
    pub days_worked: u32,
    /// Worked days classified as half days.
    pub half_days: u32,
    /// Working dates with no entry at all.
    pub absences: u32,
    /// Paid leave days taken.
    pub paid_leaves: u32,
    /// Unpaid leave days taken.
    pub unpaid_leaves: u32,
    /// Days the earliest clock-in was later than the expected start.
    pub late_arrivals: u32,
    /// Days the latest clock-out was earlier than the expected end.
    pub early_departures: u32,
    /// Total hours logged on working dates.
    pub total_hours_worked: Decimal,
    /// Hours beyond the standard day length on working dates.
    pub overtime_hours: Decimal,
    /// Hours logged on weekly off dates.
    pub weekend_hours: Decimal,
    /// Hours logged on configured holidays.
    pub holiday_hours: Decimal,
}

/// Earnings side of a payslip, fully broken down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    /// Daily rate times actual days worked, before the half-day deduction.
    pub basic_pay: Decimal,
    /// Half of the daily rate per half day, subtracted from basic pay.
    pub half_day_deduction: Decimal,
    /// House rent allowance, pro-rated by attendance.
    pub hra: Decimal,
    /// Dearness allowance, pro-rated by attendance.
    pub da: Decimal,
    /// Transport allowance, pro-rated by attendance.
    pub transport_allowance: Decimal,
    /// Medical allowance, pro-rated by attendance.
    pub medical_allowance: Decimal,
    /// Special allowance, pro-rated by attendance.
    pub special_allowance: Decimal,
    /// Sum of custom allowances, pro-rated by attendance.
    pub other_allowances: Decimal,
    /// Regular overtime pay.
    pub overtime_pay: Decimal,
    /// Weekend overtime pay.
    pub weekend_overtime_pay: Decimal,
    /// Holiday overtime pay.
    pub holiday_overtime_pay: Decimal,
    /// Sum of bonuses for the period.
    pub bonuses: Decimal,
}

/// Deductions side of a payslip, fully broken down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionsBreakdown {
    /// Income tax as a percentage of gross earnings, when enabled.
    pub income_tax: Decimal,
    /// Provident fund as a percentage of basic pay.
    pub provident_fund: Decimal,
    /// Flat professional tax.
    pub professional_tax: Decimal,
    /// Flat health insurance premium.
    pub health_insurance: Decimal,
    /// Per-occurrence late arrival penalties.
    pub late_deduction: Decimal,
    /// Daily rate times unpaid leave days.
    pub unpaid_leave_deduction: Decimal,
    /// Sum of custom fixed/percentage deductions.
    pub other_deductions: Decimal,
}

/// The net summary of a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySummary {
    /// Total gross earnings for the period.
    pub gross_salary: Decimal,
    /// Total of all deductions.
    pub total_deductions: Decimal,
    /// Gross minus deductions, floored at zero.
    pub net_salary: Decimal,
}

/// A fully assembled payslip for one user and one pay cycle.
///
/// The engine produces this value; persistence and rendering (PDF, CSV, UI
/// preview) are the caller's concern.
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayslipData;
///
/// // The derived id embeds the last six characters of the user id and the
/// // digits of the cycle start date.
/// let id = PayslipData::derive_id("65f1a2b3c4d5e6f7a8b9c0d1", "2024-01-01");
/// assert_eq!(id, "PS-b9c0d1-20240101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipData {
    /// Deterministic payslip identifier.
    pub id: String,
    /// The user this payslip belongs to.
    pub user_id: String,
    /// Pay period information.
    pub period: PeriodInfo,
    /// Attendance counts.
    pub attendance: AttendanceSummary,
    /// Earnings breakdown.
    pub earnings: EarningsBreakdown,
    /// Deductions breakdown.
    pub deductions: DeductionsBreakdown,
    /// Net summary.
    pub summary: PaySummary,
}

impl PayslipData {
    /// Derives the deterministic payslip id for a user and cycle start date.
    ///
    /// The id has the form `PS-<last 6 chars of user_id>-<start date digits>`.
    /// User ids shorter than six characters are used whole.
    pub fn derive_id(user_id: &str, cycle_start: &str) -> String {
        // Count in chars, not bytes: slicing at len - 6 could land inside
        // a multi-byte character.
        let tail_start = user_id
            .char_indices()
            .rev()
            .nth(5)
            .map_or(0, |(i, _)| i);
        let tail = &user_id[tail_start..];
        let digits: String = cycle_start.chars().filter(|c| c.is_ascii_digit()).collect();
        format!("PS-{}-{}", tail, digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// PD-001: id embeds last six of user id and date digits
    #[test]
    fn test_derive_id_long_user_id() {
        let id = PayslipData::derive_id("65f1a2b3c4d5e6f7a8b9c0d1", "2024-01-01");
        assert_eq!(id, "PS-b9c0d1-20240101");
    }

    /// PD-002: short user ids are used whole
    #[test]
    fn test_derive_id_short_user_id() {
        let id = PayslipData::derive_id("u42", "2024-01-19");
        assert_eq!(id, "PS-u42-20240119");
    }

    /// PD-003: same inputs give the same id
    #[test]
    fn test_derive_id_deterministic() {
        let a = PayslipData::derive_id("user_000001", "2025-12-19");
        let b = PayslipData::derive_id("user_000001", "2025-12-19");
        assert_eq!(a, b);
        assert_eq!(a, "PS-000001-20251219");
    }

    /// PD-004: multi-byte characters in the user id are counted as chars
    #[test]
    fn test_derive_id_non_ascii_user_id() {
        // len - 6 in bytes would land inside the 'é' here.
        let id = PayslipData::derive_id("aé12345", "2024-01-01");
        assert_eq!(id, "PS-é12345-20240101");

        let id = PayslipData::derive_id("日本語のユーザー", "2024-01-01");
        assert_eq!(id, "PS-語のユーザー-20240101");
    }
}
