//! Payslip assembly.
//!
//! This module orchestrates the working-day resolver, rate resolver,
//! attendance analyzer, and earnings/deduction composers into one immutable
//! payslip value. Monetary amounts are rounded to two decimals once, at the
//! leaf level; every total is a sum of already-rounded leaves, so
//! re-rounding any output field is a no-op.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PaymentPolicy;
use crate::models::{
    DeductionsBreakdown, EarningsBreakdown, PaySlipBreakdown, PaySlipInput, PaySlipOutput,
    PaySummary, PayslipData, PeriodInfo, SalaryBasis, SalaryCycle, SalaryPayType, SalaryRecord,
    TimeEntry,
};

use super::attendance::analyze_time_entries;
use super::deductions::{DeductionsResult, compose_deductions};
use super::earnings::{EarningsResult, compose_earnings};
use super::rates::resolve_rates;
use super::working_days::calculate_working_days;

/// Rounds a monetary amount to two decimal places, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds every leaf and derives the rounded gross/total/net figures.
fn build_breakdowns(
    earnings: &EarningsResult,
    deductions: &DeductionsResult,
) -> (EarningsBreakdown, DeductionsBreakdown, PaySummary) {
    let earnings_breakdown = EarningsBreakdown {
        basic_pay: round_money(earnings.basic_pay),
        half_day_deduction: round_money(earnings.half_day_deduction),
        hra: round_money(earnings.hra),
        da: round_money(earnings.da),
        transport_allowance: round_money(earnings.transport_allowance),
        medical_allowance: round_money(earnings.medical_allowance),
        special_allowance: round_money(earnings.special_allowance),
        other_allowances: round_money(earnings.other_allowances),
        overtime_pay: round_money(earnings.overtime_pay),
        weekend_overtime_pay: round_money(earnings.weekend_overtime_pay),
        holiday_overtime_pay: round_money(earnings.holiday_overtime_pay),
        bonuses: round_money(earnings.bonuses),
    };

    let deductions_breakdown = DeductionsBreakdown {
        income_tax: round_money(deductions.income_tax),
        provident_fund: round_money(deductions.provident_fund),
        professional_tax: round_money(deductions.professional_tax),
        health_insurance: round_money(deductions.health_insurance),
        late_deduction: round_money(deductions.late_deduction),
        unpaid_leave_deduction: round_money(deductions.unpaid_leave_deduction),
        other_deductions: round_money(deductions.other_deductions),
    };

    // Totals are sums of rounded leaves, so they carry at most two decimals
    // themselves.
    let gross_salary = earnings_breakdown.basic_pay - earnings_breakdown.half_day_deduction
        + earnings_breakdown.hra
        + earnings_breakdown.da
        + earnings_breakdown.transport_allowance
        + earnings_breakdown.medical_allowance
        + earnings_breakdown.special_allowance
        + earnings_breakdown.other_allowances
        + earnings_breakdown.overtime_pay
        + earnings_breakdown.weekend_overtime_pay
        + earnings_breakdown.holiday_overtime_pay
        + earnings_breakdown.bonuses;

    let total_deductions = deductions_breakdown.income_tax
        + deductions_breakdown.provident_fund
        + deductions_breakdown.professional_tax
        + deductions_breakdown.health_insurance
        + deductions_breakdown.late_deduction
        + deductions_breakdown.unpaid_leave_deduction
        + deductions_breakdown.other_deductions;

    let net_salary = (gross_salary - total_deductions).max(Decimal::ZERO);

    (
        earnings_breakdown,
        deductions_breakdown,
        PaySummary {
            gross_salary,
            total_deductions,
            net_salary,
        },
    )
}

/// Calculates an entry-independent pay projection.
///
/// This is the lower-level sibling of [`generate_payslip_from_entries`]:
/// attendance, overtime, and leave arrive as pre-aggregated counters
/// instead of being derived from time entries.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::calculate_pay_slip;
/// use payslip_engine::models::{PaySlipInput, SalaryBasis, SalaryCycle, SalaryPayType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = PaySlipInput {
///     base_salary: Decimal::from(30_000),
///     salary_pay_type: SalaryPayType::FixedMonthly,
///     salary_basis: SalaryBasis::WorkingDaysOnly,
///     cycle: SalaryCycle::new(
///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
///     ).unwrap(),
///     working_days: Default::default(),
///     joining_date: None,
///     leaving_date: None,
///     paid_leave_taken: Decimal::ZERO,
///     unpaid_leave_taken: Decimal::ZERO,
///     half_days_taken: 0,
///     late_arrivals: 0,
///     overtime: Default::default(),
///     overtime_hours: Decimal::ZERO,
///     weekend_overtime_hours: Decimal::ZERO,
///     holiday_overtime_hours: Decimal::ZERO,
///     allowances: Default::default(),
///     deductions: Default::default(),
///     bonuses: vec![],
/// };
///
/// let output = calculate_pay_slip(&input);
/// assert_eq!(output.base_pay, Decimal::from(30_000));
/// assert_eq!(output.net_salary, Decimal::from(30_000));
/// ```
pub fn calculate_pay_slip(input: &PaySlipInput) -> PaySlipOutput {
    let rates = resolve_rates(
        input.base_salary,
        input.salary_pay_type,
        input.salary_basis,
        &input.cycle,
        &input.working_days,
        input.joining_date,
        input.leaving_date,
    );

    let earnings = compose_earnings(
        rates.daily_rate,
        rates.hourly_rate,
        rates.working_days_in_cycle,
        input.unpaid_leave_taken,
        input.half_days_taken,
        input.overtime_hours,
        input.weekend_overtime_hours,
        input.holiday_overtime_hours,
        &input.allowances,
        &input.overtime,
        &input.bonuses,
    );

    let deductions = compose_deductions(
        &input.deductions,
        earnings.gross_earnings,
        earnings.basic_pay,
        rates.daily_rate,
        input.unpaid_leave_taken,
        input.late_arrivals,
    );

    let (earnings_breakdown, deductions_breakdown, summary) =
        build_breakdowns(&earnings, &deductions);

    PaySlipOutput {
        gross_salary: summary.gross_salary,
        working_days: rates.working_days_in_cycle,
        actual_days_worked: earnings.actual_days_worked,
        base_pay: earnings_breakdown.basic_pay,
        total_allowances: round_money(earnings.total_allowances),
        overtime_pay: earnings_breakdown.overtime_pay
            + earnings_breakdown.weekend_overtime_pay
            + earnings_breakdown.holiday_overtime_pay,
        total_deductions: summary.total_deductions,
        total_bonuses: earnings_breakdown.bonuses,
        net_salary: summary.net_salary,
        breakdown: PaySlipBreakdown {
            earnings: earnings_breakdown,
            deductions: deductions_breakdown,
        },
    }
}

/// Generates a payslip from recorded time entries.
///
/// Orchestrates the full pipeline: working-day resolution over the cycle,
/// rate resolution from the salary record (annual amounts divided by 12,
/// the record's hours-per-day as the working-hours unit), time entry
/// analysis, and earnings/deduction composition. The payslip id is
/// deterministic for a given user and cycle.
pub fn generate_payslip_from_entries(
    entries: &[TimeEntry],
    salary_record: &SalaryRecord,
    policy: &PaymentPolicy,
    cycle: &SalaryCycle,
    user_id: &str,
) -> PayslipData {
    // The salary record's working terms override the policy's day length.
    let mut working_config = policy.working_days.clone();
    working_config.hours_per_day = salary_record.working.hours_per_day;

    let monthly_salary = salary_record.monthly_amount();

    let breakdown =
        calculate_working_days(cycle.start_date, cycle.end_date, &working_config);

    let analysis = analyze_time_entries(
        entries,
        cycle.start_date,
        cycle.end_date,
        &working_config,
        &policy.holidays,
        policy.expected_start_time.as_deref(),
        policy.expected_end_time.as_deref(),
    );

    let rates = resolve_rates(
        monthly_salary,
        SalaryPayType::FixedMonthly,
        SalaryBasis::WorkingDaysOnly,
        cycle,
        &working_config,
        None,
        None,
    );

    let earnings = compose_earnings(
        rates.daily_rate,
        rates.hourly_rate,
        rates.working_days_in_cycle,
        Decimal::from(analysis.unpaid_leaves),
        analysis.half_days,
        analysis.overtime_hours,
        analysis.weekend_hours,
        analysis.holiday_hours,
        &policy.allowances,
        &policy.overtime,
        &policy.bonuses,
    );

    let deductions = compose_deductions(
        &policy.deductions,
        earnings.gross_earnings,
        earnings.basic_pay,
        rates.daily_rate,
        Decimal::from(analysis.unpaid_leaves),
        analysis.late_arrivals,
    );

    let (earnings_breakdown, deductions_breakdown, summary) =
        build_breakdowns(&earnings, &deductions);

    let cycle_start = cycle.start_date.format("%Y-%m-%d").to_string();

    PayslipData {
        id: PayslipData::derive_id(user_id, &cycle_start),
        user_id: user_id.to_string(),
        period: PeriodInfo {
            start_date: cycle.start_date,
            end_date: cycle.end_date,
            total_days: cycle.total_days(),
            working_days: breakdown.working_days,
            weekly_offs: breakdown.weekly_offs,
        },
        attendance: crate::models::AttendanceSummary {
            days_worked: analysis.total_days_worked,
            half_days: analysis.half_days,
            absences: analysis.absences,
            paid_leaves: analysis.paid_leaves,
            unpaid_leaves: analysis.unpaid_leaves,
            late_arrivals: analysis.late_arrivals,
            early_departures: analysis.early_departures,
            total_hours_worked: analysis.total_hours_worked,
            overtime_hours: analysis.overtime_hours,
            weekend_hours: analysis.weekend_hours,
            holiday_hours: analysis.holiday_hours,
        },
        earnings: earnings_breakdown,
        deductions: deductions_breakdown,
        summary,
    }
}
