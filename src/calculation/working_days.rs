//! Working day classification logic.
//!
//! This module decides, for any calendar date, whether it is a full working
//! day, a half day, or an off day under a [`WorkingDaysConfig`], and counts
//! working days across a date range. Off rules are evaluated before the
//! half-day rule, so a Saturday can never be both off and a half day.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{SaturdayMode, WorkingDaysConfig};

/// The portion of a standard day that a date contributes to working time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPortion {
    /// A weekly off or alternating-Saturday off.
    Off,
    /// A half-day Saturday.
    Half,
    /// A full working day.
    Full,
}

impl DayPortion {
    /// The working-hours factor for this portion: 0, 0.5, or 1.0.
    pub fn factor(self) -> Decimal {
        match self {
            DayPortion::Off => Decimal::ZERO,
            DayPortion::Half => Decimal::new(5, 1),
            DayPortion::Full => Decimal::ONE,
        }
    }
}

/// Working day counts for a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysBreakdown {
    /// Working days, counting half days as 0.5.
    pub working_days: Decimal,
    /// Number of off days.
    pub weekly_offs: u32,
    /// Number of half days (also reflected in `working_days` at 0.5 each).
    pub half_days: u32,
}

/// Returns the weekday number of a date, 0=Sunday through 6=Saturday.
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Returns which occurrence of its weekday a date is within its month.
///
/// The 1st through 7th of a month are the first occurrence, the 8th
/// through 14th the second, and so on.
fn weekday_occurrence(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

/// Determines whether a date is a weekly off under the given configuration.
///
/// A date is off when its weekday is listed in `weekly_offs`, or it is a
/// Saturday matching the Saturday mode (all-off, or the alternating
/// occurrence patterns), or a legacy second/fourth Saturday flag applies.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::is_weekly_off;
/// use payslip_engine::config::{SaturdayMode, WorkingDaysConfig};
/// use chrono::NaiveDate;
///
/// let config = WorkingDaysConfig {
///     weekly_offs: vec![0],
///     saturday_mode: SaturdayMode::AlternateSecondFourth,
///     ..WorkingDaysConfig::default()
/// };
///
/// // 2024-01-13 is the second Saturday of January 2024.
/// assert!(is_weekly_off(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap(), &config));
/// // 2024-01-06 is the first Saturday and stays a working day.
/// assert!(!is_weekly_off(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(), &config));
/// ```
pub fn is_weekly_off(date: NaiveDate, config: &WorkingDaysConfig) -> bool {
    if config.weekly_offs.contains(&weekday_number(date)) {
        return true;
    }

    if date.weekday() != Weekday::Sat {
        return false;
    }

    let occurrence = weekday_occurrence(date);
    let mode_off = match config.saturday_mode {
        SaturdayMode::AllOff => true,
        SaturdayMode::AlternateFirstThird => occurrence == 1 || occurrence == 3,
        SaturdayMode::AlternateSecondFourth => occurrence == 2 || occurrence == 4,
        SaturdayMode::Working | SaturdayMode::HalfDay => false,
    };

    // Legacy flags are additive with the mode.
    let legacy_off = (config.second_saturday_off && occurrence == 2)
        || (config.fourth_saturday_off && occurrence == 4);

    mode_off || legacy_off
}

/// Determines whether a date is a half-day Saturday.
///
/// Half-day status only applies in `half-day` Saturday mode, and only when
/// no off rule has already claimed the date.
pub fn is_saturday_half_day(date: NaiveDate, config: &WorkingDaysConfig) -> bool {
    date.weekday() == Weekday::Sat
        && config.saturday_mode == SaturdayMode::HalfDay
        && !is_weekly_off(date, config)
}

/// Classifies a date as off, half, or full working day.
pub fn working_hours_factor(date: NaiveDate, config: &WorkingDaysConfig) -> DayPortion {
    if is_weekly_off(date, config) {
        DayPortion::Off
    } else if is_saturday_half_day(date, config) {
        DayPortion::Half
    } else {
        DayPortion::Full
    }
}

/// Counts working days, offs, and half days over an inclusive date range.
///
/// Full days contribute 1.0 to `working_days` and half days 0.5; half days
/// are also counted separately.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::calculate_working_days;
/// use payslip_engine::config::WorkingDaysConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // January 2024 with Sundays off: 31 days minus 4 Sundays.
/// let config = WorkingDaysConfig::default();
/// let breakdown = calculate_working_days(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
///     &config,
/// );
/// assert_eq!(breakdown.working_days, Decimal::from(27));
/// assert_eq!(breakdown.weekly_offs, 4);
/// ```
pub fn calculate_working_days(
    start_date: NaiveDate,
    end_date: NaiveDate,
    config: &WorkingDaysConfig,
) -> WorkingDaysBreakdown {
    let mut working_days = Decimal::ZERO;
    let mut weekly_offs = 0u32;
    let mut half_days = 0u32;

    let mut date = start_date;
    while date <= end_date {
        match working_hours_factor(date, config) {
            DayPortion::Off => weekly_offs += 1,
            DayPortion::Half => {
                half_days += 1;
                working_days += Decimal::new(5, 1);
            }
            DayPortion::Full => working_days += Decimal::ONE,
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    WorkingDaysBreakdown {
        working_days,
        weekly_offs,
        half_days,
    }
}
