//! HTTP API module for the Tardiness Engine.
//!
//! This module exposes the classification engine over JSON: single
//! classifications, registrations, backfill, summaries and the effective
//! policy.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BackfillRequest, ClassifyRequest, RegistrationRequest, SummaryRequest};
pub use response::{ApiError, ApiErrorResponse, BackfillResponse};
pub use state::AppState;
