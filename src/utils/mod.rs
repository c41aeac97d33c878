//! Helpers shared by the domain and HTTP layers.
//!
//! - [`code_generator`] - Random short-name generation
//! - [`client_ip`] - Client address resolution behind optional proxies
//! - [`field_name`] - camelCase to snake_case conversion for error reports

pub mod client_ip;
pub mod code_generator;
pub mod field_name;
