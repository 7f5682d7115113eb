//! Payment policy configuration types.
//!
//! Every field carries an explicit serde default so a partial YAML or JSON
//! document deserializes into a fully-defaulted policy exactly once, at
//! construction. [`PaymentPolicy::validate`] checks the fields a schema
//! would.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Policy governing whether and how Saturdays are worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SaturdayMode {
    /// Every Saturday is a full off day.
    #[serde(rename = "all-off")]
    AllOff,
    /// Every Saturday is a full working day.
    #[serde(rename = "working")]
    #[default]
    Working,
    /// The 1st and 3rd Saturdays of each month are off.
    #[serde(rename = "alternate-1-3")]
    AlternateFirstThird,
    /// The 2nd and 4th Saturdays of each month are off.
    #[serde(rename = "alternate-2-4")]
    AlternateSecondFourth,
    /// Every Saturday is a half working day.
    #[serde(rename = "half-day")]
    HalfDay,
}

/// Per-user working days policy.
///
/// Weekdays are numbered 0=Sunday through 6=Saturday. The Saturday mode is
/// evaluated first; the legacy second/fourth Saturday flags are additionally
/// OR'd in for configurations that predate the mode field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingDaysConfig {
    /// Weekday numbers (0=Sunday..6=Saturday) that are always off.
    #[serde(default = "default_weekly_offs")]
    pub weekly_offs: Vec<u8>,
    /// Saturday policy.
    #[serde(default)]
    pub saturday_mode: SaturdayMode,
    /// Legacy flag: the 2nd Saturday of each month is off.
    #[serde(default)]
    pub second_saturday_off: bool,
    /// Legacy flag: the 4th Saturday of each month is off.
    #[serde(default)]
    pub fourth_saturday_off: bool,
    /// Standard working hours per day.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: Decimal,
}

fn default_weekly_offs() -> Vec<u8> {
    vec![0]
}

fn default_hours_per_day() -> Decimal {
    Decimal::from(8)
}

impl Default for WorkingDaysConfig {
    fn default() -> Self {
        Self {
            weekly_offs: default_weekly_offs(),
            saturday_mode: SaturdayMode::default(),
            second_saturday_off: false,
            fourth_saturday_off: false,
            hours_per_day: default_hours_per_day(),
        }
    }
}

impl WorkingDaysConfig {
    /// Validates weekday numbers and the hours-per-day figure.
    pub fn validate(&self) -> EngineResult<()> {
        if let Some(bad) = self.weekly_offs.iter().find(|d| **d > 6) {
            return Err(EngineError::CalculationError {
                message: format!("weekly off day {} is out of range 0..=6", bad),
            });
        }
        if self.hours_per_day < Decimal::ZERO {
            return Err(EngineError::CalculationError {
                message: "hours_per_day must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// Leave entitlement policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LeavePolicy {
    /// Paid leave days allowed per cycle.
    #[serde(default)]
    pub paid_leave_allowance: Decimal,
}

/// Overtime policy with per-tier multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimePolicy {
    /// Whether overtime is payable at all.
    #[serde(default)]
    pub enabled: bool,
    /// Multiplier for regular overtime hours.
    #[serde(default = "default_overtime_multiplier")]
    pub rate_multiplier: Decimal,
    /// Multiplier for hours worked on weekly off days.
    #[serde(default = "default_weekend_multiplier")]
    pub weekend_rate_multiplier: Decimal,
    /// Multiplier for hours worked on holidays.
    #[serde(default = "default_holiday_multiplier")]
    pub holiday_rate_multiplier: Decimal,
}

fn default_overtime_multiplier() -> Decimal {
    Decimal::new(15, 1)
}

fn default_weekend_multiplier() -> Decimal {
    Decimal::from(2)
}

fn default_holiday_multiplier() -> Decimal {
    Decimal::new(25, 1)
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            rate_multiplier: default_overtime_multiplier(),
            weekend_rate_multiplier: default_weekend_multiplier(),
            holiday_rate_multiplier: default_holiday_multiplier(),
        }
    }
}

/// A named custom allowance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAllowance {
    /// Display name of the allowance.
    pub name: String,
    /// Amount per cycle.
    pub amount: Decimal,
}

/// Monthly allowance amounts.
///
/// Each allowance is pro-rated by the attendance ratio before it reaches
/// the payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AllowancePolicy {
    /// House rent allowance.
    #[serde(default)]
    pub hra: Decimal,
    /// Dearness allowance.
    #[serde(default)]
    pub da: Decimal,
    /// Transport allowance.
    #[serde(default)]
    pub transport: Decimal,
    /// Medical allowance.
    #[serde(default)]
    pub medical: Decimal,
    /// Special allowance.
    #[serde(default)]
    pub special: Decimal,
    /// Custom allowances.
    #[serde(default)]
    pub other: Vec<CustomAllowance>,
}

/// A named custom deduction, either a fixed amount or a percentage of gross.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDeduction {
    /// Display name of the deduction.
    pub name: String,
    /// Fixed amount, or percentage when `is_percentage` is set.
    pub amount: Decimal,
    /// Interpret `amount` as a percentage of gross earnings.
    #[serde(default)]
    pub is_percentage: bool,
}

/// Deduction policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionPolicy {
    /// Whether income tax is deducted.
    #[serde(default)]
    pub tax_enabled: bool,
    /// Income tax percentage of gross earnings.
    #[serde(default)]
    pub tax_percentage: Decimal,
    /// Provident fund percentage of basic pay.
    #[serde(default)]
    pub provident_fund_percentage: Decimal,
    /// Flat professional tax per cycle.
    #[serde(default)]
    pub professional_tax: Decimal,
    /// Flat health insurance premium per cycle.
    #[serde(default)]
    pub health_insurance: Decimal,
    /// Flat penalty per late arrival.
    #[serde(default = "default_late_arrival_penalty")]
    pub late_arrival_penalty: Decimal,
    /// Custom deductions.
    #[serde(default)]
    pub other: Vec<CustomDeduction>,
}

fn default_late_arrival_penalty() -> Decimal {
    Decimal::from(50)
}

impl Default for DeductionPolicy {
    fn default() -> Self {
        Self {
            tax_enabled: false,
            tax_percentage: Decimal::ZERO,
            provident_fund_percentage: Decimal::ZERO,
            professional_tax: Decimal::ZERO,
            health_insurance: Decimal::ZERO,
            late_arrival_penalty: default_late_arrival_penalty(),
            other: Vec::new(),
        }
    }
}

/// A named bonus paid out in the cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    /// Display name of the bonus.
    pub name: String,
    /// Bonus amount.
    pub amount: Decimal,
}

/// The complete payment policy for one user.
///
/// # Example
///
/// ```
/// use payslip_engine::config::PaymentPolicy;
///
/// // A partial document deserializes with every omitted field defaulted.
/// let policy: PaymentPolicy = serde_yaml::from_str("overtime:\n  enabled: true\n").unwrap();
/// assert!(policy.overtime.enabled);
/// assert_eq!(policy.working_days.weekly_offs, vec![0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PaymentPolicy {
    /// Working days configuration.
    #[serde(default)]
    pub working_days: WorkingDaysConfig,
    /// Leave entitlement.
    #[serde(default)]
    pub leave: LeavePolicy,
    /// Overtime rules.
    #[serde(default)]
    pub overtime: OvertimePolicy,
    /// Allowance amounts.
    #[serde(default)]
    pub allowances: AllowancePolicy,
    /// Deduction rules.
    #[serde(default)]
    pub deductions: DeductionPolicy,
    /// Bonuses payable in the cycle.
    #[serde(default)]
    pub bonuses: Vec<Bonus>,
    /// Holiday dates recognized by this policy.
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// Expected daily start time in `"HH:mm"`, for late arrival detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_start_time: Option<String>,
    /// Expected daily end time in `"HH:mm"`, for early departure detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_end_time: Option<String>,
    /// ISO currency code, passed through to presentation layers.
    #[serde(default)]
    pub currency: String,
    /// BCP-47 locale tag, passed through to presentation layers.
    #[serde(default)]
    pub locale: String,
}

impl PaymentPolicy {
    /// Validates the policy fields a schema would check.
    pub fn validate(&self) -> EngineResult<()> {
        self.working_days.validate()?;
        for (name, pct) in [
            ("tax_percentage", self.deductions.tax_percentage),
            (
                "provident_fund_percentage",
                self.deductions.provident_fund_percentage,
            ),
        ] {
            if pct < Decimal::ZERO || pct > Decimal::from(100) {
                return Err(EngineError::CalculationError {
                    message: format!("{} must be within 0..=100, got {}", name, pct),
                });
            }
        }
        Ok(())
    }
}
