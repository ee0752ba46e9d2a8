//! Error types.

use thiserror::Error;

/// Errors raised by route search.
///
/// Both variants are raised before any distance work starts; a solve call
/// either returns a full permutation or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// A supplied point could not be read as a finite `(x, y)` pair.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// An option value was not recognized (e.g. an unknown strategy name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl TourError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidArgument(_) => "invalid_argument",
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = TourError::invalid_input("point 2 has 3 coordinates");
        assert_eq!(e.to_string(), "invalid input: point 2 has 3 coordinates");
        let e = TourError::invalid_argument("unknown strategy \"fast\"");
        assert_eq!(e.to_string(), "invalid argument: unknown strategy \"fast\"");
    }

    #[test]
    fn test_kind() {
        assert_eq!(TourError::invalid_input("x").kind(), "invalid_input");
        assert_eq!(TourError::invalid_argument("x").kind(), "invalid_argument");
    }
}
