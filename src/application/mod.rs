//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API that
//! speaks in domain types and [`crate::error::AppError`].

pub mod services;
