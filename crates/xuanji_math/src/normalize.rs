//! 1-based modulo normalization.
//!
//! Divination tables are indexed 1..=N, so zero and exact multiples of the
//! modulus map to N itself rather than 0. Negative inputs wrap by magnitude,
//! which keeps every reading positive: with N = 8, `8 → 8`, `0 → 8`,
//! `-9 → 1`, `-8 → 8`, `16 → 8`, `9 → 1`.

use crate::number::{AsNumber, finite};

/// Wrap an integer into `[1, modulus]`.
///
/// `modulus` must be non-zero.
pub const fn wrap_1_based(value: i64, modulus: u32) -> u32 {
    let m = modulus as u64;
    ((value.unsigned_abs() + m - 1) % m + 1) as u32
}

/// Normalize an arbitrary value into `[1, modulus]`.
///
/// Returns `None` when the value has no finite numeric reading or the
/// modulus is zero. Finite non-integers are truncated toward zero first.
pub fn normalize_number<T: AsNumber + ?Sized>(value: &T, modulus: u32) -> Option<u32> {
    if modulus == 0 {
        return None;
    }
    let n = finite(value)?.trunc().abs();
    let m = f64::from(modulus);
    let wrapped = (n + m - 1.0) % m + 1.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let idx = wrapped as u32;
    // float remainder on huge magnitudes can land outside the range.
    Some(idx.clamp(1, modulus))
}
