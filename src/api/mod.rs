//! HTTP API module for the Hours Allocation Engine.
//!
//! This module provides the REST endpoint that runs the allocation
//! pipeline over a fully materialized input batch.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AllocationRequest;
pub use response::{AllocationResponse, ApiError};
pub use state::AppState;
