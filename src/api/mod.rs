//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for listing and creating
//! candidates, previewing payroll, pushing and downloading the payroll
//! sheet, and saving payroll runs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DownloadRequest, PayrollAction, PreviewRequest, PushRequest, SaveRequest};
pub use response::{ApiError, PreviewResponse, PushResponse, SaveResponse};
pub use state::AppState;
