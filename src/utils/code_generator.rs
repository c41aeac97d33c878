//! Short-name generation.
//!
//! Generated names are not guaranteed unique. Collisions are caught by the
//! `links_short_name_key` unique index and retried by the link service.

use rand::distr::{Alphanumeric, SampleString};

/// Length of a generated short name.
pub const GENERATED_LENGTH: usize = 6;

/// Generates a random short name over `[A-Za-z0-9]`.
///
/// Draws from the thread-local generator, which is seeded from the operating
/// system on first use, so processes never share a sequence.
pub fn generate_short_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), GENERATED_LENGTH)
}
