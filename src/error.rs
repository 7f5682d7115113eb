//! Error types for the payslip calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payslip calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payslip calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::PolicyNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Payment policy file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Payment policy file was not found at the specified path.
    #[error("Payment policy file not found: {path}")]
    PolicyNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Payment policy file could not be parsed.
    #[error("Failed to parse payment policy file '{path}': {message}")]
    PolicyParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A cycle date range was inverted.
    #[error("Invalid cycle: start date {start} is after end date {end}")]
    InvalidCycle {
        /// The cycle start date.
        start: NaiveDate,
        /// The cycle end date.
        end: NaiveDate,
    },

    /// A cycle start day fell outside the supported 1..=28 range.
    #[error("Invalid cycle start day {day}: must be between 1 and 28")]
    InvalidCycleStartDay {
        /// The rejected day-of-month.
        day: u32,
    },

    /// A calendar date could not be constructed from its components.
    #[error("Invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year component.
        year: i32,
        /// The month component.
        month: u32,
        /// The day component.
        day: u32,
    },

    /// No salary record applies to the requested date.
    #[error("No salary record effective on or before {date}")]
    NoApplicableSalary {
        /// The date for which a salary record was requested.
        date: NaiveDate,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
