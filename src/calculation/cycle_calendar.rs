//! Cycle calendar utilities.
//!
//! This module generates monthly pay cycles anchored on a configurable
//! day-of-month. A cycle start day of 1 produces plain calendar months; any
//! other start day (up to 28, so every month has the anchor) produces
//! cycles like the 19th through the 18th of the next month.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::SalaryCycle;

/// Highest supported cycle start day; every month has at least 28 days.
pub const MAX_CYCLE_START_DAY: u32 = 28;

fn make_date(year: i32, month: u32, day: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(EngineError::InvalidDate { year, month, day })
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

fn validate_start_day(cycle_start_day: u32) -> EngineResult<()> {
    if cycle_start_day == 0 || cycle_start_day > MAX_CYCLE_START_DAY {
        return Err(EngineError::InvalidCycleStartDay {
            day: cycle_start_day,
        });
    }
    Ok(())
}

/// Creates the pay cycle anchored in the given month.
///
/// With `cycle_start_day == 1` this is the calendar month. Otherwise the
/// cycle runs from `year-month-cycle_start_day` through the day before the
/// anchor in the following month, rolling the year at December.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::create_monthly_cycle;
/// use chrono::NaiveDate;
///
/// let cycle = create_monthly_cycle(2025, 12, 19).unwrap();
/// assert_eq!(cycle.start_date, NaiveDate::from_ymd_opt(2025, 12, 19).unwrap());
/// assert_eq!(cycle.end_date, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// ```
pub fn create_monthly_cycle(
    year: i32,
    month: u32,
    cycle_start_day: u32,
) -> EngineResult<SalaryCycle> {
    validate_start_day(cycle_start_day)?;

    if cycle_start_day == 1 {
        let start = make_date(year, month, 1)?;
        let (next_year, next) = next_month(year, month);
        let end = make_date(next_year, next, 1)?
            .pred_opt()
            .ok_or(EngineError::InvalidDate { year, month, day: 1 })?;
        return SalaryCycle::new(start, end);
    }

    let start = make_date(year, month, cycle_start_day)?;
    let (next_year, next) = next_month(year, month);
    let end = make_date(next_year, next, cycle_start_day - 1)?;
    SalaryCycle::new(start, end)
}

/// Returns the cycle containing the given date.
///
/// When the date's day-of-month is on or after the anchor the cycle started
/// in the date's own month; otherwise it started the month before.
pub fn cycle_for_date(date: NaiveDate, cycle_start_day: u32) -> EngineResult<SalaryCycle> {
    validate_start_day(cycle_start_day)?;

    if date.day() >= cycle_start_day {
        create_monthly_cycle(date.year(), date.month(), cycle_start_day)
    } else {
        let (year, month) = prev_month(date.year(), date.month());
        create_monthly_cycle(year, month, cycle_start_day)
    }
}

/// Returns the cycle containing today, per the local calendar.
pub fn current_salary_cycle(cycle_start_day: u32) -> EngineResult<SalaryCycle> {
    cycle_for_date(Local::now().date_naive(), cycle_start_day)
}

/// Returns the last `n` cycles ending with the one containing `date`,
/// oldest first.
pub fn last_n_cycles_from(
    date: NaiveDate,
    n: usize,
    cycle_start_day: u32,
) -> EngineResult<Vec<SalaryCycle>> {
    let current = cycle_for_date(date, cycle_start_day)?;
    let mut cycles = Vec::with_capacity(n);

    let mut year = current.start_date.year();
    let mut month = current.start_date.month();
    for _ in 0..n {
        cycles.push(create_monthly_cycle(year, month, cycle_start_day)?);
        (year, month) = prev_month(year, month);
    }

    cycles.reverse();
    Ok(cycles)
}

/// Returns the last `n` cycles up to today, oldest first.
pub fn last_n_cycles(n: usize, cycle_start_day: u32) -> EngineResult<Vec<SalaryCycle>> {
    last_n_cycles_from(Local::now().date_naive(), n, cycle_start_day)
}

/// Returns all twelve cycles anchored in the given calendar year.
pub fn yearly_salary_cycles(year: i32, cycle_start_day: u32) -> EngineResult<Vec<SalaryCycle>> {
    validate_start_day(cycle_start_day)?;
    (1..=12)
        .map(|month| create_monthly_cycle(year, month, cycle_start_day))
        .collect()
}
