//! Request types for the payslip engine API.
//!
//! This module defines the JSON request structures for the `/payslip`,
//! `/projection`, and `/cycles` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PaymentPolicy;
use crate::models::{
    LeaveEntry, LeaveType, SalaryRecord, SalaryType, TimeEntry, WorkingTerms,
};

/// Request body for the `/payslip` endpoint.
///
/// Contains the recorded time entries, the salary history to resolve a rate
/// from, and optionally a payment policy that overrides the server default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// Identifier of the user the payslip is for.
    pub user_id: String,
    /// The salary cycle to generate the payslip for.
    pub cycle: CycleRequest,
    /// The user's salary history, any order.
    pub salary_history: Vec<SalaryRecordRequest>,
    /// Time entries recorded during the cycle.
    #[serde(default)]
    pub entries: Vec<TimeEntryRequest>,
    /// Payment policy override; the server default applies when omitted.
    #[serde(default)]
    pub policy: Option<PaymentPolicy>,
}

/// Salary cycle bounds in a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CycleRequest {
    /// The start date of the cycle (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the cycle (inclusive).
    pub end_date: NaiveDate,
}

/// A salary history record in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRecordRequest {
    /// The salary amount.
    pub amount: Decimal,
    /// Whether `amount` is per month or per year.
    pub salary_type: SalaryType,
    /// The date this record becomes effective.
    pub effective_from: NaiveDate,
    /// The working terms attached to this record.
    pub working: WorkingTermsRequest,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
}

/// Working terms in a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkingTermsRequest {
    /// Standard working hours per day.
    pub hours_per_day: Decimal,
    /// Nominal working days per month.
    pub days_per_month: Decimal,
}

/// A time entry in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryRequest {
    /// The date of the entry.
    pub date: NaiveDate,
    /// Clock-in time as `"HH:mm"`.
    #[serde(default)]
    pub time_in: Option<String>,
    /// Clock-out time as `"HH:mm"`.
    #[serde(default)]
    pub time_out: Option<String>,
    /// Hours worked on this entry.
    #[serde(default)]
    pub total_hours: Decimal,
    /// Leave marker for the day, if any.
    #[serde(default)]
    pub leave: Option<LeaveEntryRequest>,
}

/// A leave marker in a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeaveEntryRequest {
    /// Whether the entry records a leave day.
    pub is_leave: bool,
    /// The kind of leave taken.
    pub leave_type: LeaveType,
}

/// Query parameters for the `/cycles` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CyclesQuery {
    /// Day-of-month each cycle starts on (1..=28).
    #[serde(default = "default_start_day")]
    pub start_day: u32,
    /// Number of cycles to return, most recent last.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Anchor date; the server's current date applies when omitted.
    #[serde(default)]
    pub from: Option<NaiveDate>,
}

fn default_start_day() -> u32 {
    1
}

fn default_count() -> usize {
    3
}

impl From<SalaryRecordRequest> for SalaryRecord {
    fn from(req: SalaryRecordRequest) -> Self {
        SalaryRecord {
            amount: req.amount,
            salary_type: req.salary_type,
            effective_from: req.effective_from,
            working: req.working.into(),
            note: req.note,
        }
    }
}

impl From<WorkingTermsRequest> for WorkingTerms {
    fn from(req: WorkingTermsRequest) -> Self {
        WorkingTerms {
            hours_per_day: req.hours_per_day,
            days_per_month: req.days_per_month,
        }
    }
}

impl From<TimeEntryRequest> for TimeEntry {
    fn from(req: TimeEntryRequest) -> Self {
        TimeEntry {
            date: req.date,
            time_in: req.time_in,
            time_out: req.time_out,
            total_hours: req.total_hours,
            total_earnings: Decimal::ZERO,
            leave: req.leave.map(Into::into),
        }
    }
}

impl From<LeaveEntryRequest> for LeaveEntry {
    fn from(req: LeaveEntryRequest) -> Self {
        LeaveEntry {
            is_leave: req.is_leave,
            leave_type: req.leave_type,
        }
    }
}
