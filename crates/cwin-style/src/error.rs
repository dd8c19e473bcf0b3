#![forbid(unsafe_code)]

//! Errors raised while turning theme values into typed style.

use std::fmt;

/// A theme value that could not be used as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    /// A string did not name any known variant.
    UnknownValue { field: &'static str, value: String },
    /// A descriptor field expected a number.
    InvalidNumber { field: &'static str, value: String },
    /// A pixel size or spacing was negative or not finite.
    InvalidScalar { field: &'static str, value: f32 },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownValue { field, value } => {
                write!(f, "unknown value {value:?} for {field}")
            }
            Self::InvalidNumber { field, value } => {
                write!(f, "{field} expects a number, got {value:?}")
            }
            Self::InvalidScalar { field, value } => {
                write!(f, "{field} must be finite and non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field() {
        let err = StyleError::UnknownValue {
            field: "layout/position",
            value: "sideways".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown value \"sideways\" for layout/position"
        );
    }
}
