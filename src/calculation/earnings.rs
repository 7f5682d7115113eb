//! Earnings composition.
//!
//! This module combines the resolved rates, attendance results, allowances,
//! overtime tiers, and bonuses into gross earnings. Allowances are pro-rated
//! by the attendance ratio; each overtime tier is priced independently and
//! zeroed wholesale when overtime is disabled.

use rust_decimal::Decimal;

use crate::config::{AllowancePolicy, Bonus, OvertimePolicy};

use super::safe_div;

/// The composed earnings for a cycle, before deductions.
#[derive(Debug, Clone, PartialEq)]
pub struct EarningsResult {
    /// Working days minus unpaid leave days, floored at zero.
    pub actual_days_worked: Decimal,
    /// Fraction of working days actually worked, used to pro-rate allowances.
    pub attendance_ratio: Decimal,
    /// Daily rate times actual days worked.
    pub basic_pay: Decimal,
    /// Half the daily rate per half day, subtracted from basic pay.
    pub half_day_deduction: Decimal,
    /// House rent allowance after pro-ration.
    pub hra: Decimal,
    /// Dearness allowance after pro-ration.
    pub da: Decimal,
    /// Transport allowance after pro-ration.
    pub transport_allowance: Decimal,
    /// Medical allowance after pro-ration.
    pub medical_allowance: Decimal,
    /// Special allowance after pro-ration.
    pub special_allowance: Decimal,
    /// Sum of custom allowances after pro-ration.
    pub other_allowances: Decimal,
    /// All allowances combined.
    pub total_allowances: Decimal,
    /// Regular overtime pay.
    pub overtime_pay: Decimal,
    /// Weekend overtime pay.
    pub weekend_overtime_pay: Decimal,
    /// Holiday overtime pay.
    pub holiday_overtime_pay: Decimal,
    /// Sum of bonuses.
    pub bonuses: Decimal,
    /// Basic pay minus the half-day deduction plus allowances, overtime,
    /// and bonuses.
    pub gross_earnings: Decimal,
}

/// Composes gross earnings from rates, attendance, and policy.
///
/// `unpaid_leave_days` reduces the payable day count: actual days worked is
/// `working_days - unpaid_leave_days`, floored at zero. Each overtime tier
/// is `hourly_rate * multiplier * hours`; all three are zero when the
/// overtime policy is disabled, regardless of hours supplied.
#[allow(clippy::too_many_arguments)]
pub fn compose_earnings(
    daily_rate: Decimal,
    hourly_rate: Decimal,
    working_days: Decimal,
    unpaid_leave_days: Decimal,
    half_days_count: u32,
    overtime_hours: Decimal,
    weekend_overtime_hours: Decimal,
    holiday_overtime_hours: Decimal,
    allowances: &AllowancePolicy,
    overtime: &OvertimePolicy,
    bonuses: &[Bonus],
) -> EarningsResult {
    let actual_days_worked = (working_days - unpaid_leave_days).max(Decimal::ZERO);
    let attendance_ratio = safe_div(actual_days_worked, working_days);

    let basic_pay = daily_rate * actual_days_worked;
    let half_day_deduction =
        daily_rate / Decimal::from(2) * Decimal::from(half_days_count);

    let hra = allowances.hra * attendance_ratio;
    let da = allowances.da * attendance_ratio;
    let transport_allowance = allowances.transport * attendance_ratio;
    let medical_allowance = allowances.medical * attendance_ratio;
    let special_allowance = allowances.special * attendance_ratio;
    let other_allowances: Decimal = allowances
        .other
        .iter()
        .map(|a| a.amount * attendance_ratio)
        .sum();
    let total_allowances = hra
        + da
        + transport_allowance
        + medical_allowance
        + special_allowance
        + other_allowances;

    let (overtime_pay, weekend_overtime_pay, holiday_overtime_pay) = if overtime.enabled {
        (
            hourly_rate * overtime.rate_multiplier * overtime_hours,
            hourly_rate * overtime.weekend_rate_multiplier * weekend_overtime_hours,
            hourly_rate * overtime.holiday_rate_multiplier * holiday_overtime_hours,
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    };

    let bonuses_total: Decimal = bonuses.iter().map(|b| b.amount).sum();

    let gross_earnings = basic_pay - half_day_deduction
        + total_allowances
        + overtime_pay
        + weekend_overtime_pay
        + holiday_overtime_pay
        + bonuses_total;

    EarningsResult {
        actual_days_worked,
        attendance_ratio,
        basic_pay,
        half_day_deduction,
        hra,
        da,
        transport_allowance,
        medical_allowance,
        special_allowance,
        other_allowances,
        total_allowances,
        overtime_pay,
        weekend_overtime_pay,
        holiday_overtime_pay,
        bonuses: bonuses_total,
        gross_earnings,
    }
}
