//! Rate resolution.
//!
//! This module converts a base salary amount with its pay type and basis
//! into a daily and hourly rate for a cycle, applying pro-ration when a
//! joining or leaving date falls inside the cycle.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::WorkingDaysConfig;
use crate::models::{SalaryBasis, SalaryCycle, SalaryPayType};

use super::safe_div;
use super::working_days::calculate_working_days;

/// The resolved rates and effective window for a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RateResolution {
    /// Pay per working day.
    pub daily_rate: Decimal,
    /// Pay per hour.
    pub hourly_rate: Decimal,
    /// Fraction of the cycle the employee is eligible for.
    pub pro_rata_factor: Decimal,
    /// First payable date of the cycle.
    pub effective_start: NaiveDate,
    /// Last payable date of the cycle.
    pub effective_end: NaiveDate,
    /// Inclusive day count of the effective window.
    pub effective_days_in_cycle: i64,
    /// Working days within the effective window (half days count 0.5).
    pub working_days_in_cycle: Decimal,
}

/// Resolves daily and hourly rates for a base salary over a cycle.
///
/// The effective window starts at the joining date when it falls inside the
/// cycle and ends at the leaving date when it falls inside the cycle; the
/// pro-rata factor is the effective day count over the total cycle days.
///
/// For `fixed_monthly` pay the pro-rated salary is divided by 30
/// (`calendar_month` basis), by the effective day count (`cycle_days`), or
/// by the working day count (`working_days_only`). A `daily_wage` salary is
/// used as the daily rate directly; an `hourly` salary as the hourly rate.
/// Every division with a possibly-zero denominator yields zero.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::resolve_rates;
/// use payslip_engine::config::WorkingDaysConfig;
/// use payslip_engine::models::{SalaryBasis, SalaryCycle, SalaryPayType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let cycle = SalaryCycle::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// ).unwrap();
///
/// let resolution = resolve_rates(
///     Decimal::from(30_000),
///     SalaryPayType::FixedMonthly,
///     SalaryBasis::WorkingDaysOnly,
///     &cycle,
///     &WorkingDaysConfig::default(),
///     None,
///     None,
/// );
///
/// // 27 working days in January 2024 with Sundays off.
/// assert_eq!(resolution.working_days_in_cycle, Decimal::from(27));
/// let reconstructed = (resolution.daily_rate * Decimal::from(27)).round_dp(2);
/// assert_eq!(reconstructed, Decimal::from(30_000));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn resolve_rates(
    base_salary: Decimal,
    pay_type: SalaryPayType,
    basis: SalaryBasis,
    cycle: &SalaryCycle,
    working_config: &WorkingDaysConfig,
    joining_date: Option<NaiveDate>,
    leaving_date: Option<NaiveDate>,
) -> RateResolution {
    let effective_start = match joining_date {
        Some(joined) if cycle.contains_date(joined) => joined,
        _ => cycle.start_date,
    };
    let effective_end = match leaving_date {
        Some(left) if cycle.contains_date(left) => left,
        _ => cycle.end_date,
    };

    let total_days = cycle.total_days();
    let effective_days = (effective_end - effective_start).num_days() + 1;
    let pro_rata_factor = safe_div(Decimal::from(effective_days), Decimal::from(total_days));

    let working_days_in_cycle =
        calculate_working_days(effective_start, effective_end, working_config).working_days;

    let (daily_rate, hourly_rate) = match pay_type {
        SalaryPayType::FixedMonthly => {
            let pro_rated_salary = base_salary * pro_rata_factor;
            let daily = match basis {
                SalaryBasis::CalendarMonth => pro_rated_salary / Decimal::from(30),
                SalaryBasis::CycleDays => {
                    safe_div(pro_rated_salary, Decimal::from(effective_days))
                }
                SalaryBasis::WorkingDaysOnly => safe_div(pro_rated_salary, working_days_in_cycle),
            };
            (daily, safe_div(daily, working_config.hours_per_day))
        }
        SalaryPayType::DailyWage => (
            base_salary,
            safe_div(base_salary, working_config.hours_per_day),
        ),
        SalaryPayType::Hourly => (base_salary * working_config.hours_per_day, base_salary),
    };

    RateResolution {
        daily_rate,
        hourly_rate,
        pro_rata_factor,
        effective_start,
        effective_end,
        effective_days_in_cycle: effective_days,
        working_days_in_cycle,
    }
}
