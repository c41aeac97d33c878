//! HTTP middleware for request processing.
//!
//! Provides the access log, the request deadline, and the CORS policy.

pub mod cors;
pub mod timeout;
pub mod tracing;
