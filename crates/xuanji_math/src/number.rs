//! Lenient numeric coercion.
//!
//! Payload fields reach the engine as JSON numbers, numeric strings, or
//! garbage. `AsNumber` collapses all of them into `Option<f64>` so callers
//! can decide validity with a single `is_finite` check.

use serde_json::Value;

/// A value that may be interpreted as a number.
///
/// Returns `None` when the value has no numeric reading at all. A returned
/// `f64` may still be non-finite (e.g. `f64::NAN` passed through directly).
pub trait AsNumber {
    fn as_number(&self) -> Option<f64>;
}

macro_rules! impl_as_number_lossless {
    ($($t:ty),*) => {
        $(
            impl AsNumber for $t {
                fn as_number(&self) -> Option<f64> {
                    Some(f64::from(*self))
                }
            }
        )*
    };
}

impl_as_number_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);

macro_rules! impl_as_number_wide {
    ($($t:ty),*) => {
        $(
            impl AsNumber for $t {
                #[allow(clippy::cast_precision_loss)]
                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_as_number_wide!(i64, u64, isize, usize);

impl AsNumber for str {
    fn as_number(&self) -> Option<f64> {
        let s = self.trim();
        if s.is_empty() {
            return None;
        }
        s.parse::<f64>().ok()
    }
}

impl AsNumber for String {
    fn as_number(&self) -> Option<f64> {
        self.as_str().as_number()
    }
}

impl AsNumber for Value {
    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.as_number(),
            _ => None,
        }
    }
}

impl<T: AsNumber> AsNumber for Option<T> {
    fn as_number(&self) -> Option<f64> {
        self.as_ref().and_then(AsNumber::as_number)
    }
}

impl<T: AsNumber + ?Sized> AsNumber for &T {
    fn as_number(&self) -> Option<f64> {
        (**self).as_number()
    }
}

/// Coerce to a finite number, rejecting NaN and infinities.
pub fn finite<T: AsNumber + ?Sized>(value: &T) -> Option<f64> {
    value.as_number().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_and_floats() {
        assert_eq!(7_i32.as_number(), Some(7.0));
        assert_eq!((-3_i64).as_number(), Some(-3.0));
        assert_eq!(2.5_f64.as_number(), Some(2.5));
    }

    #[test]
    fn numeric_strings() {
        assert_eq!("42".as_number(), Some(42.0));
        assert_eq!("  -9 ".as_number(), Some(-9.0));
        assert_eq!("1.5".as_number(), Some(1.5));
    }

    #[test]
    fn non_numeric_strings() {
        assert_eq!("not-a-number".as_number(), None);
        assert_eq!("".as_number(), None);
        assert_eq!("   ".as_number(), None);
    }

    #[test]
    fn json_values() {
        assert_eq!(AsNumber::as_number(&json!(12)), Some(12.0));
        assert_eq!(AsNumber::as_number(&json!("12")), Some(12.0));
        assert_eq!(AsNumber::as_number(&json!(null)), None);
        assert_eq!(AsNumber::as_number(&json!(true)), None);
        assert_eq!(AsNumber::as_number(&json!([1])), None);
    }

    #[test]
    fn options() {
        assert_eq!(Some(3_u32).as_number(), Some(3.0));
        assert_eq!(None::<u32>.as_number(), None);
    }

    #[test]
    fn finite_rejects_nan_and_infinity() {
        assert_eq!(finite(&f64::NAN), None);
        assert_eq!(finite(&f64::INFINITY), None);
        assert_eq!(finite("inf"), None);
        assert_eq!(finite(&4.0_f64), Some(4.0));
    }
}
