//! Payslip calculation engine for time tracking and payroll.
//!
//! This crate converts raw time-entry records plus a flexible payment policy
//! into a fully broken-down payslip: gross pay, allowances, overtime,
//! deductions, and net pay. It honors custom salary cycles, variable
//! weekly-off patterns (including alternating Saturdays), pro-rated
//! joining/leaving dates, and multiple pay bases (monthly/daily/hourly).
//!
//! The calculation core is pure and synchronous; the `api` module exposes it
//! over HTTP for route-handler style callers.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
