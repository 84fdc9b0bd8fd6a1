//! Unit conversions for HBAR amounts.

/// Number of tinybars in one HBAR.
pub const TINYBARS_PER_HBAR: i64 = 100_000_000;

/// Converts a tinybar amount to HBAR display units.
///
/// Negative amounts (outgoing transfers) stay negative.
#[must_use]
pub fn tinybars_to_hbar(tinybars: i64) -> f64 {
    tinybars as f64 / TINYBARS_PER_HBAR as f64
}
