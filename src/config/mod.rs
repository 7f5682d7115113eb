//! Payment policy configuration for the payslip engine.
//!
//! This module provides the strongly-typed policy structures and the
//! [`PolicyLoader`] for reading policy documents from YAML files.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    AllowancePolicy, Bonus, CustomAllowance, CustomDeduction, DeductionPolicy, LeavePolicy,
    OvertimePolicy, PaymentPolicy, SaturdayMode, WorkingDaysConfig,
};
