//! Salary record model and pay-type enums.
//!
//! A user's salary history is an append-only list of [`SalaryRecord`]s; the
//! record with the latest `effective_from` not exceeding a given date is the
//! applicable one for that date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a salary amount is quoted per month or per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// The amount is a monthly salary.
    Monthly,
    /// The amount is an annual salary (divided by 12 for monthly math).
    Annual,
}

/// How the base salary amount is interpreted when deriving rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryPayType {
    /// A fixed amount per month, pro-rated across the cycle.
    FixedMonthly,
    /// The amount is a daily wage; pay follows days actually worked.
    DailyWage,
    /// The amount is an hourly rate; pay follows hours actually worked.
    Hourly,
}

/// Which day-count divides a monthly salary into a daily rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBasis {
    /// Divide by a fixed 30-day calendar month.
    CalendarMonth,
    /// Divide by the number of days in the cycle.
    CycleDays,
    /// Divide by the number of working days in the cycle.
    WorkingDaysOnly,
}

/// Standard working terms attached to a salary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingTerms {
    /// Standard working hours per day.
    pub hours_per_day: Decimal,
    /// Standard working days per month.
    pub days_per_month: Decimal,
}

/// One entry in a user's salary history.
///
/// Records are immutable once created; a raise or correction is a new
/// record with a later `effective_from`.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{SalaryRecord, SalaryType, WorkingTerms};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = SalaryRecord {
///     amount: Decimal::from(360_000),
///     salary_type: SalaryType::Annual,
///     effective_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     working: WorkingTerms {
///         hours_per_day: Decimal::from(8),
///         days_per_month: Decimal::from(26),
///     },
///     note: None,
/// };
/// assert_eq!(record.monthly_amount(), Decimal::from(30_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// The salary amount, interpreted per `salary_type`.
    pub amount: Decimal,
    /// Whether `amount` is monthly or annual.
    pub salary_type: SalaryType,
    /// The first date this record applies to.
    pub effective_from: NaiveDate,
    /// Standard working terms for this record.
    pub working: WorkingTerms,
    /// Optional free-form note (e.g., "annual increment").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SalaryRecord {
    /// Returns the monthly salary amount, annualized amounts divided by 12.
    pub fn monthly_amount(&self) -> Decimal {
        match self.salary_type {
            SalaryType::Monthly => self.amount,
            SalaryType::Annual => self.amount / Decimal::from(12),
        }
    }
}

/// Finds the salary record applicable on a given date.
///
/// The applicable record is the one with the latest `effective_from` that
/// does not exceed `date`. The history does not need to be sorted.
///
/// Returns `None` when no record is effective on or before `date`.
pub fn applicable_record(history: &[SalaryRecord], date: NaiveDate) -> Option<&SalaryRecord> {
    history
        .iter()
        .filter(|r| r.effective_from <= date)
        .max_by_key(|r| r.effective_from)
}
