//! Payroll Engine for staffing-agency candidates
//!
//! This crate computes candidate pay, client billing and net profit from
//! stored base rates and per-period overrides, and serves previews, sheet
//! exports and saved payroll runs over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
