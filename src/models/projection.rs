//! Ad-hoc pay projection types.
//!
//! [`PaySlipInput`] carries pre-aggregated attendance and leave counters
//! instead of raw time entries, for what-if calculations ("what would I
//! earn if I took two days of unpaid leave?") that are not tied to recorded
//! entries. [`PaySlipOutput`] is the deterministic pure function of that
//! input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{AllowancePolicy, Bonus, DeductionPolicy, OvertimePolicy, WorkingDaysConfig};

use super::payslip::{DeductionsBreakdown, EarningsBreakdown};
use super::salary::{SalaryBasis, SalaryPayType};
use super::SalaryCycle;

/// Input for an entry-independent pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaySlipInput {
    /// The base salary amount, interpreted per `salary_pay_type`.
    pub base_salary: Decimal,
    /// How the base salary is quoted.
    pub salary_pay_type: SalaryPayType,
    /// Which day-count divides salary into a daily rate.
    pub salary_basis: SalaryBasis,
    /// The pay cycle to project over.
    pub cycle: SalaryCycle,
    /// Working days configuration.
    #[serde(default)]
    pub working_days: WorkingDaysConfig,
    /// Joining date, when it falls inside the cycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    /// Leaving date, when it falls inside the cycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaving_date: Option<NaiveDate>,
    /// Paid leave days taken in the cycle.
    #[serde(default)]
    pub paid_leave_taken: Decimal,
    /// Unpaid leave days taken in the cycle.
    #[serde(default)]
    pub unpaid_leave_taken: Decimal,
    /// Half days taken in the cycle.
    #[serde(default)]
    pub half_days_taken: u32,
    /// Late arrivals in the cycle.
    #[serde(default)]
    pub late_arrivals: u32,
    /// Overtime rules to apply.
    #[serde(default)]
    pub overtime: OvertimePolicy,
    /// Regular overtime hours.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Weekend overtime hours.
    #[serde(default)]
    pub weekend_overtime_hours: Decimal,
    /// Holiday overtime hours.
    #[serde(default)]
    pub holiday_overtime_hours: Decimal,
    /// Allowance amounts.
    #[serde(default)]
    pub allowances: AllowancePolicy,
    /// Deduction rules.
    #[serde(default)]
    pub deductions: DeductionPolicy,
    /// Bonuses payable in the cycle.
    #[serde(default)]
    pub bonuses: Vec<Bonus>,
}

/// Nested breakdown inside a [`PaySlipOutput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySlipBreakdown {
    /// Earnings side, fully broken down.
    pub earnings: EarningsBreakdown,
    /// Deductions side, fully broken down.
    pub deductions: DeductionsBreakdown,
}

/// The result of an entry-independent pay calculation.
///
/// All monetary fields are rounded to two decimals; `net_salary` is never
/// negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySlipOutput {
    /// Total gross earnings for the cycle.
    pub gross_salary: Decimal,
    /// Working days in the effective window (half days count 0.5).
    pub working_days: Decimal,
    /// Working days minus unpaid leave, floored at zero.
    pub actual_days_worked: Decimal,
    /// Basic pay before the half-day deduction.
    pub base_pay: Decimal,
    /// All allowances combined.
    pub total_allowances: Decimal,
    /// All overtime tiers combined.
    pub overtime_pay: Decimal,
    /// All deductions combined.
    pub total_deductions: Decimal,
    /// All bonuses combined.
    pub total_bonuses: Decimal,
    /// Gross minus deductions, floored at zero.
    pub net_salary: Decimal,
    /// Per-component breakdown.
    pub breakdown: PaySlipBreakdown,
}
