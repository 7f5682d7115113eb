//! Calculation logic for the payslip engine.
//!
//! This module contains all the calculation functions for producing a
//! payslip, including working-day resolution with weekly off and Saturday
//! policies, per-day and per-hour rate resolution with joining and leaving
//! pro-ration, time entry analysis for attendance and overtime, earnings
//! composition with pro-rated allowances and tiered overtime, deduction
//! composition, salary cycle calendar arithmetic, and final payslip
//! assembly.

mod attendance;
mod cycle_calendar;
mod deductions;
mod earnings;
mod payslip;
mod rates;
mod working_days;

pub use attendance::{HALF_DAY_HOURS_MARGIN, TimeEntryAnalysis, analyze_time_entries};
pub use cycle_calendar::{
    MAX_CYCLE_START_DAY, create_monthly_cycle, current_salary_cycle, cycle_for_date,
    last_n_cycles, last_n_cycles_from, yearly_salary_cycles,
};
pub use deductions::{DeductionsResult, compose_deductions};
pub use earnings::{EarningsResult, compose_earnings};
pub use payslip::{calculate_pay_slip, generate_payslip_from_entries, round_money};
pub use rates::{RateResolution, resolve_rates};
pub use working_days::{
    DayPortion, WorkingDaysBreakdown, calculate_working_days, is_saturday_half_day,
    is_weekly_off, weekday_number, working_hours_factor,
};

use rust_decimal::Decimal;

/// Division that treats a zero denominator as a zero result.
///
/// Pay-rate math divides by day and hour counts that can legitimately be
/// zero (a cycle with no working days, a zero hours-per-day policy); in
/// those cases the rate is zero rather than an error.
pub(crate) fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_div_zero_denominator() {
        assert_eq!(safe_div(Decimal::from(10), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_safe_div_regular() {
        assert_eq!(
            safe_div(Decimal::from(10), Decimal::from(4)),
            Decimal::new(25, 1)
        );
    }
}
