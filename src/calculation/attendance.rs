//! Time entry analysis.
//!
//! This module classifies every expected working date in a range as worked,
//! leave, half day, or absent, and accumulates the hour counters the
//! earnings and deduction composers consume. Clock times are `"HH:mm"`
//! strings compared lexically, which is ordering-correct for that format.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::WorkingDaysConfig;
use crate::models::TimeEntry;

use super::working_days::{DayPortion, working_hours_factor};

/// Tolerance added to half the standard day when classifying half days.
///
/// A worked day with hours in `(0, hours_per_day / 2 + margin]` counts as a
/// half day. The one-hour margin is a heuristic; it is a named constant so
/// it can be tuned or replaced by an explicit half-day flag on the entry.
pub const HALF_DAY_HOURS_MARGIN: Decimal = Decimal::ONE;

/// Counters produced by analyzing time entries over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntryAnalysis {
    /// Hours logged on working dates.
    pub total_hours_worked: Decimal,
    /// Working dates with at least one non-leave entry.
    pub total_days_worked: u32,
    /// Hours beyond the standard day length on working dates.
    pub overtime_hours: Decimal,
    /// Hours logged on weekly off dates.
    pub weekend_hours: Decimal,
    /// Hours logged on configured holiday dates.
    pub holiday_hours: Decimal,
    /// Days where the earliest clock-in was later than the expected start.
    pub late_arrivals: u32,
    /// Days where the latest clock-out was earlier than the expected end.
    pub early_departures: u32,
    /// Worked days classified as half days.
    pub half_days: u32,
    /// Working dates with no entry at all.
    pub absences: u32,
    /// Paid leave days (sick or vacation).
    pub paid_leaves: u32,
    /// Unpaid leave days.
    pub unpaid_leaves: u32,
    /// In-range entries grouped by date.
    pub entries_by_date: BTreeMap<NaiveDate, Vec<TimeEntry>>,
}

/// Analyzes time entries over an inclusive date range.
///
/// Every working date (full or half day per the configuration) is
/// classified exactly once: absent when it has no entries, a paid or unpaid
/// leave when an entry carries a leave flag, otherwise worked. Hours on
/// weekly off dates accumulate separately into `weekend_hours` and never
/// contribute to the working-date counters; hours on dates listed in
/// `holidays` accumulate into `holiday_hours` the same way.
///
/// `expected_start`/`expected_end` are optional `"HH:mm"` times used for
/// late-arrival and early-departure detection.
pub fn analyze_time_entries(
    entries: &[TimeEntry],
    start_date: NaiveDate,
    end_date: NaiveDate,
    config: &WorkingDaysConfig,
    holidays: &[NaiveDate],
    expected_start: Option<&str>,
    expected_end: Option<&str>,
) -> TimeEntryAnalysis {
    let mut entries_by_date: BTreeMap<NaiveDate, Vec<TimeEntry>> = BTreeMap::new();
    for entry in entries {
        if entry.date >= start_date && entry.date <= end_date {
            entries_by_date
                .entry(entry.date)
                .or_default()
                .push(entry.clone());
        }
    }

    let mut analysis = TimeEntryAnalysis {
        total_hours_worked: Decimal::ZERO,
        total_days_worked: 0,
        overtime_hours: Decimal::ZERO,
        weekend_hours: Decimal::ZERO,
        holiday_hours: Decimal::ZERO,
        late_arrivals: 0,
        early_departures: 0,
        half_days: 0,
        absences: 0,
        paid_leaves: 0,
        unpaid_leaves: 0,
        entries_by_date: BTreeMap::new(),
    };

    let half_day_threshold = config.hours_per_day / Decimal::from(2) + HALF_DAY_HOURS_MARGIN;

    let mut date = start_date;
    while date <= end_date {
        let portion = working_hours_factor(date, config);
        let day_entries = entries_by_date.get(&date);

        if portion == DayPortion::Off {
            // Off-day work accumulates into weekend hours only.
            if let Some(day_entries) = day_entries {
                for entry in day_entries {
                    if !entry.is_leave() {
                        analysis.weekend_hours += entry.total_hours;
                    }
                }
            }
        } else {
            match day_entries {
                None => analysis.absences += 1,
                Some(day_entries) => {
                    if let Some(leave) = day_entries.iter().find_map(|e| e.leave.filter(|l| l.is_leave)) {
                        if leave.leave_type.is_paid() {
                            analysis.paid_leaves += 1;
                        } else {
                            analysis.unpaid_leaves += 1;
                        }
                    } else {
                        let day_hours: Decimal =
                            day_entries.iter().map(|e| e.total_hours).sum();
                        analysis.total_hours_worked += day_hours;
                        analysis.total_days_worked += 1;

                        if day_hours > Decimal::ZERO && day_hours <= half_day_threshold {
                            analysis.half_days += 1;
                        }
                        if day_hours > config.hours_per_day {
                            analysis.overtime_hours += day_hours - config.hours_per_day;
                        }

                        if let Some(expected_start) = expected_start {
                            let earliest_in =
                                day_entries.iter().filter_map(|e| e.time_in.as_deref()).min();
                            if earliest_in.is_some_and(|t| t > expected_start) {
                                analysis.late_arrivals += 1;
                            }
                        }
                        if let Some(expected_end) = expected_end {
                            let latest_out =
                                day_entries.iter().filter_map(|e| e.time_out.as_deref()).max();
                            if latest_out.is_some_and(|t| t < expected_end) {
                                analysis.early_departures += 1;
                            }
                        }
                    }
                }
            }
        }

        if holidays.contains(&date) {
            if let Some(day_entries) = day_entries {
                for entry in day_entries {
                    if !entry.is_leave() {
                        analysis.holiday_hours += entry.total_hours;
                    }
                }
            }
        }

        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    analysis.entries_by_date = entries_by_date;
    analysis
}
