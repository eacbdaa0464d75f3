//! Error types for the tabular Q-learner.

/// A specialized `Result` type for learner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The primary error enum for all operations within the `tabular_q` crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was rejected, e.g. an empty dimension vector passed to `init`.
    InvalidArgument(String),
    /// A state coordinate is not smaller than the size of its dimension.
    OutOfRange {
        /// Position of the offending coordinate within the state vector.
        dimension: usize,
        /// The coordinate value that was supplied.
        value: usize,
        /// The number of discrete values the dimension accepts.
        size: usize,
    },
    /// A state vector does not have one coordinate per dimension.
    DimensionMismatch {
        /// The dimensionality of the state space.
        expected: usize,
        /// The length of the supplied state vector.
        got: usize,
    },
    /// A table operation was invoked before a successful `init`.
    NotInitialized,
    /// An action index (or linear state index) is outside `[0, len)`.
    IndexOutOfRange {
        /// The index that was supplied.
        index: usize,
        /// The exclusive upper bound.
        len: usize,
    },
    /// The learner configuration is invalid or could not be parsed.
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::OutOfRange {
                dimension,
                value,
                size,
            } => write!(
                f,
                "State index out of bounds: coordinate {} is {} but dimension size is {}",
                dimension, value, size
            ),
            Error::DimensionMismatch { expected, got } => write!(
                f,
                "State dimension mismatch: expected {} coordinates, got {}",
                expected, got
            ),
            Error::NotInitialized => write!(f, "Q-table is not initialized"),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range (must be < {})", index, len)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl Error {
    /// Checks whether the error stems from a bad call rather than from the learner's state.
    ///
    /// Recoverable errors leave the table untouched, so the caller can fix the
    /// input and retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::OutOfRange { .. }
                | Error::DimensionMismatch { .. }
                | Error::IndexOutOfRange { .. }
        )
    }

    /// Helper to create an `InvalidArgument` error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let errors = vec![
            (
                Error::InvalidArgument("Dimensions cannot be empty.".into()),
                "Invalid argument: Dimensions cannot be empty.",
            ),
            (
                Error::OutOfRange {
                    dimension: 1,
                    value: 4,
                    size: 3,
                },
                "State index out of bounds: coordinate 1 is 4 but dimension size is 3",
            ),
            (
                Error::DimensionMismatch {
                    expected: 3,
                    got: 2,
                },
                "State dimension mismatch: expected 3 coordinates, got 2",
            ),
            (Error::NotInitialized, "Q-table is not initialized"),
            (
                Error::IndexOutOfRange { index: 5, len: 2 },
                "Index 5 out of range (must be < 2)",
            ),
            (
                Error::Config("bad alpha".into()),
                "Configuration error: bad alpha",
            ),
        ];

        for (error, expected) in errors {
            assert_eq!(format!("{}", error), expected);
        }
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::IndexOutOfRange { index: 2, len: 2 }.is_recoverable());
        assert!(Error::DimensionMismatch {
            expected: 2,
            got: 1
        }
        .is_recoverable());
        assert!(!Error::NotInitialized.is_recoverable());
        assert!(!Error::invalid_argument("x").is_recoverable());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("{invalid}");
        let error: Error = json_result.unwrap_err().into();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn test_error_is_error_trait() {
        let error = Error::NotInitialized;
        let _: &dyn std::error::Error = &error;
    }
}
