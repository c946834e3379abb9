use std::fmt;

use thiserror::Error;

/// Error for workout and routine name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Human readable name of a workout or routine.
///
/// Trimmed, non-empty, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    const MAX_LENGTH: usize = 100;

    pub fn new(name: String) -> Result<Self, NameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let name = DisplayName::new("  Leg day ".to_string()).unwrap();
        assert_eq!(name.as_str(), "Leg day");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(DisplayName::new("   ".to_string()), Err(NameError::Empty));
    }

    #[test]
    fn test_long_name_rejected() {
        assert_eq!(
            DisplayName::new("x".repeat(101)),
            Err(NameError::TooLong {
                max: 100,
                actual: 101
            })
        );
    }
}
