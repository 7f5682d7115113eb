//! HTTP API module for the payslip engine.
//!
//! This module provides the REST API endpoints for generating payslips,
//! calculating pay projections, and listing salary cycles.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CycleRequest, CyclesQuery, LeaveEntryRequest, PayslipRequest, SalaryRecordRequest,
    TimeEntryRequest, WorkingTermsRequest,
};
pub use response::ApiError;
pub use state::AppState;
