//! Domain models for the payslip calculation engine.

mod cycle;
mod payslip;
mod projection;
mod salary;
mod time_entry;

pub use cycle::SalaryCycle;
pub use payslip::{
    AttendanceSummary, DeductionsBreakdown, EarningsBreakdown, PaySummary, PayslipData, PeriodInfo,
};
pub use projection::{PaySlipBreakdown, PaySlipInput, PaySlipOutput};
pub use salary::{SalaryBasis, SalaryPayType, SalaryRecord, SalaryType, WorkingTerms, applicable_record};
pub use time_entry::{LeaveEntry, LeaveType, TimeEntry};
