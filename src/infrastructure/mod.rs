//! Infrastructure layer for external integrations.
//!
//! Implements the repository trait defined by the domain layer.

pub mod persistence;
