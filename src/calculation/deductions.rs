//! Deduction composition.
//!
//! This module computes the deduction side of a payslip: income tax,
//! provident fund, flat statutory amounts, late-arrival penalties, the
//! unpaid-leave deduction, and custom fixed or percentage deductions.

use rust_decimal::Decimal;

use crate::config::DeductionPolicy;

/// The composed deductions for a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct DeductionsResult {
    /// Income tax: a percentage of gross earnings, when enabled.
    pub income_tax: Decimal,
    /// Provident fund: a percentage of basic pay.
    pub provident_fund: Decimal,
    /// Flat professional tax.
    pub professional_tax: Decimal,
    /// Flat health insurance premium.
    pub health_insurance: Decimal,
    /// Per-occurrence late arrival penalties.
    pub late_deduction: Decimal,
    /// Daily rate times unpaid leave days.
    pub unpaid_leave_deduction: Decimal,
    /// Custom deductions, fixed or percentage of gross.
    pub other_deductions: Decimal,
    /// Sum of all of the above.
    pub total_deductions: Decimal,
}

/// Composes all deductions for a cycle.
///
/// Income tax applies only when the policy enables it. The late penalty is
/// a configured flat amount per late arrival. Custom deductions flagged
/// `is_percentage` take their cut of gross earnings; the rest are fixed.
pub fn compose_deductions(
    policy: &DeductionPolicy,
    gross_earnings: Decimal,
    basic_pay: Decimal,
    daily_rate: Decimal,
    unpaid_leave_days: Decimal,
    late_arrivals: u32,
) -> DeductionsResult {
    let hundred = Decimal::from(100);

    let income_tax = if policy.tax_enabled {
        gross_earnings * policy.tax_percentage / hundred
    } else {
        Decimal::ZERO
    };

    let provident_fund = basic_pay * policy.provident_fund_percentage / hundred;
    let late_deduction = policy.late_arrival_penalty * Decimal::from(late_arrivals);
    let unpaid_leave_deduction = daily_rate * unpaid_leave_days;

    let other_deductions: Decimal = policy
        .other
        .iter()
        .map(|d| {
            if d.is_percentage {
                gross_earnings * d.amount / hundred
            } else {
                d.amount
            }
        })
        .sum();

    let total_deductions = income_tax
        + provident_fund
        + policy.professional_tax
        + policy.health_insurance
        + late_deduction
        + unpaid_leave_deduction
        + other_deductions;

    DeductionsResult {
        income_tax,
        provident_fund,
        professional_tax: policy.professional_tax,
        health_insurance: policy.health_insurance,
        late_deduction,
        unpaid_leave_deduction,
        other_deductions,
        total_deductions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CustomDeduction;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// DC-001: empty policy deducts nothing
    #[test]
    fn test_empty_policy_deducts_nothing() {
        let policy = DeductionPolicy::default();
        let result = compose_deductions(
            &policy,
            dec("30000"),
            dec("27000"),
            dec("1000"),
            Decimal::ZERO,
            0,
        );
        assert_eq!(result.total_deductions, Decimal::ZERO);
    }

    /// DC-002: income tax only applies when enabled
    #[test]
    fn test_income_tax_gated_by_flag() {
        let mut policy = DeductionPolicy {
            tax_percentage: dec("10"),
            ..DeductionPolicy::default()
        };
        let result = compose_deductions(
            &policy,
            dec("30000"),
            dec("27000"),
            dec("1000"),
            Decimal::ZERO,
            0,
        );
        assert_eq!(result.income_tax, Decimal::ZERO);

        policy.tax_enabled = true;
        let result = compose_deductions(
            &policy,
            dec("30000"),
            dec("27000"),
            dec("1000"),
            Decimal::ZERO,
            0,
        );
        assert_eq!(result.income_tax, dec("3000"));
    }

    /// DC-003: provident fund is a percentage of basic pay
    #[test]
    fn test_provident_fund_of_basic() {
        let policy = DeductionPolicy {
            provident_fund_percentage: dec("12"),
            ..DeductionPolicy::default()
        };
        let result = compose_deductions(
            &policy,
            dec("30000"),
            dec("25000"),
            dec("1000"),
            Decimal::ZERO,
            0,
        );
        assert_eq!(result.provident_fund, dec("3000"));
    }

    /// DC-004: unpaid leave deducts a daily rate per day
    #[test]
    fn test_unpaid_leave_deduction() {
        let policy = DeductionPolicy::default();
        let result = compose_deductions(
            &policy,
            dec("30000"),
            dec("27000"),
            dec("1000"),
            dec("2"),
            0,
        );
        assert_eq!(result.unpaid_leave_deduction, dec("2000"));
        assert_eq!(result.total_deductions, dec("2000"));
    }

    /// DC-005: late penalty is a flat configured amount per occurrence
    #[test]
    fn test_late_penalty_per_occurrence() {
        let policy = DeductionPolicy::default();
        let result = compose_deductions(
            &policy,
            dec("30000"),
            dec("27000"),
            dec("1000"),
            Decimal::ZERO,
            3,
        );
        assert_eq!(result.late_deduction, dec("150"));

        let policy = DeductionPolicy {
            late_arrival_penalty: dec("75"),
            ..DeductionPolicy::default()
        };
        let result = compose_deductions(
            &policy,
            dec("30000"),
            dec("27000"),
            dec("1000"),
            Decimal::ZERO,
            3,
        );
        assert_eq!(result.late_deduction, dec("225"));
    }

    /// DC-006: custom deductions mix fixed and percentage forms
    #[test]
    fn test_custom_deductions() {
        let policy = DeductionPolicy {
            other: vec![
                CustomDeduction {
                    name: "canteen".to_string(),
                    amount: dec("300"),
                    is_percentage: false,
                },
                CustomDeduction {
                    name: "welfare".to_string(),
                    amount: dec("2"),
                    is_percentage: true,
                },
            ],
            ..DeductionPolicy::default()
        };
        let result = compose_deductions(
            &policy,
            dec("30000"),
            dec("27000"),
            dec("1000"),
            Decimal::ZERO,
            0,
        );
        // 300 fixed + 2% of 30000
        assert_eq!(result.other_deductions, dec("900"));
    }

    /// DC-007: flat amounts pass through into the breakdown
    #[test]
    fn test_flat_amounts_pass_through() {
        let policy = DeductionPolicy {
            professional_tax: dec("200"),
            health_insurance: dec("500"),
            ..DeductionPolicy::default()
        };
        let result = compose_deductions(
            &policy,
            dec("30000"),
            dec("27000"),
            dec("1000"),
            Decimal::ZERO,
            0,
        );
        assert_eq!(result.professional_tax, dec("200"));
        assert_eq!(result.health_insurance, dec("500"));
        assert_eq!(result.total_deductions, dec("700"));
    }
}
