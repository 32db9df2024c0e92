//! Numeric primitives shared by the divination crates.
//!
//! This crate provides:
//! - `AsNumber`, a lenient "value of unknown type" to `f64` coercion
//! - 1-based modulo normalization with positive wraparound
//! - serde helpers for payload fields that may arrive as numbers or strings

pub mod lenient;
pub mod normalize;
pub mod number;

pub use normalize::{normalize_number, wrap_1_based};
pub use number::AsNumber;
