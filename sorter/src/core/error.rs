use thiserror::Error;

use crate::core::types::Field;

/// Reasons a package cannot be classified.
///
/// Type errors always win over value errors: negativity is only checked once
/// every input has been interpreted as a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    #[error("{field} must be numeric (got {input})")]
    InvalidInputType { field: Field, input: String },

    #[error("{field} must be non-negative (got {value})")]
    InvalidInputValue { field: Field, value: f64 },
}

impl ClassifyError {
    /// The first offending input, in positional order.
    pub fn field(&self) -> Field {
        match self {
            ClassifyError::InvalidInputType { field, .. }
            | ClassifyError::InvalidInputValue { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = ClassifyError::InvalidInputType {
            field: Field::Height,
            input: "\"xyz\"".to_string(),
        };
        assert_eq!(err.to_string(), "height must be numeric (got \"xyz\")");

        let err = ClassifyError::InvalidInputValue {
            field: Field::Mass,
            value: -1.0,
        };
        assert_eq!(err.to_string(), "mass must be non-negative (got -1)");
        assert_eq!(err.field(), Field::Mass);
    }
}
