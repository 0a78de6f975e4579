//! Error types for collection operations.
//!
//! Every operation either completes and returns a fully formed result or
//! fails before touching a single element. Only two failure kinds exist:
//!
//! - [`OpsError::MissingArgument`]: a required argument was absent.
//! - [`OpsError::NegativeCount`]: a `take`/`drop` count was negative.
//!
//! Panics raised by caller-supplied closures are not caught; they unwind
//! through the operation unchanged.

/// Represents the ways an operation can reject its arguments.
///
/// Both variants name the operation and the offending argument so that the
/// call site can be diagnosed from the message alone.
///
/// # Examples
///
/// ```rust
/// use collection_ops::error::OpsError;
///
/// let error = OpsError::NegativeCount {
///     operation: "sequence::take",
///     argument: "n",
///     count: -1,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "sequence::take: n must not be negative (got -1)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OpsError {
    /// A required argument was absent.
    MissingArgument {
        /// The operation that rejected the call, e.g. `"sequence::filter_all"`.
        operation: &'static str,
        /// The name of the absent argument, e.g. `"predicate"`.
        argument: &'static str,
    },
    /// A count argument was negative.
    NegativeCount {
        /// The operation that rejected the call, e.g. `"mapping::drop"`.
        operation: &'static str,
        /// The name of the count argument.
        argument: &'static str,
        /// The rejected value.
        count: i128,
    },
}

impl OpsError {
    /// Returns the name of the operation that produced this error.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::MissingArgument { operation, .. } | Self::NegativeCount { operation, .. } => {
                operation
            }
        }
    }

    /// Returns the name of the argument that was rejected.
    #[must_use]
    pub const fn argument(&self) -> &'static str {
        match self {
            Self::MissingArgument { argument, .. } | Self::NegativeCount { argument, .. } => {
                argument
            }
        }
    }
}

impl std::fmt::Display for OpsError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument {
                operation,
                argument,
            } => write!(formatter, "{operation}: {argument} must not be absent"),
            Self::NegativeCount {
                operation,
                argument,
                count,
            } => write!(
                formatter,
                "{operation}: {argument} must not be negative (got {count})"
            ),
        }
    }
}

impl std::error::Error for OpsError {}

static_assertions::assert_impl_all!(OpsError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_display() {
        let error = OpsError::MissingArgument {
            operation: "set::filter_all",
            argument: "predicate",
        };
        assert_eq!(
            format!("{error}"),
            "set::filter_all: predicate must not be absent"
        );
    }

    #[test]
    fn test_negative_count_display() {
        let error = OpsError::NegativeCount {
            operation: "mapping::take",
            argument: "n",
            count: -42,
        };
        assert_eq!(
            format!("{error}"),
            "mapping::take: n must not be negative (got -42)"
        );
    }

    #[test]
    fn test_accessors() {
        let error = OpsError::NegativeCount {
            operation: "sequence::drop",
            argument: "n",
            count: -3,
        };
        assert_eq!(error.operation(), "sequence::drop");
        assert_eq!(error.argument(), "n");

        let error = OpsError::MissingArgument {
            operation: "sequence::filter_all",
            argument: "predicate",
        };
        assert_eq!(error.operation(), "sequence::filter_all");
        assert_eq!(error.argument(), "predicate");
    }

    #[test]
    fn test_equality() {
        let error1 = OpsError::NegativeCount {
            operation: "sequence::take",
            argument: "n",
            count: -1,
        };
        let error2 = error1.clone();
        let error3 = OpsError::NegativeCount {
            operation: "sequence::take",
            argument: "n",
            count: -2,
        };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_source_is_none() {
        use std::error::Error;

        let error = OpsError::MissingArgument {
            operation: "set::filter_all",
            argument: "predicate",
        };
        assert!(error.source().is_none());
    }
}
