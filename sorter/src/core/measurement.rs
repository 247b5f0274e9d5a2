//! Narrow coercion of raw inputs into real numbers.
//!
//! Only numeric primitives and numeric-formatted text are accepted. Anything
//! else (absent values, unparsable text, NaN) is rejected with
//! [`ClassifyError::InvalidInputType`] rather than widened silently.

use std::fmt;

use crate::core::error::ClassifyError;
use crate::core::types::Field;

/// A raw measurement as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    Number(f64),
    Text(String),
    Absent,
}

impl Measurement {
    /// Interpret this measurement as a real number.
    ///
    /// Text is trimmed before parsing, so `" 150 "` reads as `150.0`.
    /// Infinity is accepted; NaN has no numeric interpretation and is not.
    pub fn coerce(&self, field: Field) -> Result<f64, ClassifyError> {
        let parsed = match self {
            Measurement::Number(value) => Some(*value),
            Measurement::Text(text) => text.trim().parse::<f64>().ok(),
            Measurement::Absent => None,
        };
        match parsed {
            Some(value) if !value.is_nan() => Ok(value),
            _ => Err(ClassifyError::InvalidInputType {
                field,
                input: self.to_string(),
            }),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Number(value) => write!(f, "{value}"),
            Measurement::Text(text) => write!(f, "{text:?}"),
            Measurement::Absent => f.write_str("no value"),
        }
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Measurement {
                fn from(value: $ty) -> Self {
                    Measurement::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f32, i32, i64, u32, u64);

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        Measurement::Number(value)
    }
}

impl From<&str> for Measurement {
    fn from(value: &str) -> Self {
        Measurement::Text(value.to_string())
    }
}

impl From<String> for Measurement {
    fn from(value: String) -> Self {
        Measurement::Text(value)
    }
}

impl From<&String> for Measurement {
    fn from(value: &String) -> Self {
        Measurement::Text(value.clone())
    }
}

impl<T: Into<Measurement>> From<Option<T>> for Measurement {
    fn from(value: Option<T>) -> Self {
        value.map_or(Measurement::Absent, Into::into)
    }
}
