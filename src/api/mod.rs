//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to the API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors that reject with the JSON error envelope
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, deadline, and CORS middleware
//! - [`routes`] - Admin route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
