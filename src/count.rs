//! Count arguments for `take` and `drop`.
//!
//! `take` and `drop` accept any primitive integer as their count so that
//! signed values coming from arithmetic can be passed directly. A negative
//! count is rejected with [`OpsError::NegativeCount`] before iteration
//! starts. Non-negative counts larger than `usize::MAX` clamp to
//! `usize::MAX`, which already exceeds every container length.

use crate::error::OpsError;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer usable as an element count.
///
/// This trait is sealed and implemented for every primitive integer type
/// up to 64 bits plus `isize` and `usize`.
///
/// # Examples
///
/// ```rust
/// use collection_ops::count::Count;
///
/// assert_eq!(3_i32.to_count("sequence::take", "n"), Ok(3));
/// assert!((-1_i64).to_count("sequence::take", "n").is_err());
/// ```
pub trait Count: Copy + sealed::Sealed {
    /// Converts the count to `usize`, failing when it is negative.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::NegativeCount`] naming `operation` and `argument`
    /// when `self` is below zero.
    fn to_count(self, operation: &'static str, argument: &'static str) -> Result<usize, OpsError>;
}

macro_rules! impl_count {
    ($($integer:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $integer {}

            impl Count for $integer {
                #[inline]
                fn to_count(
                    self,
                    operation: &'static str,
                    argument: &'static str,
                ) -> Result<usize, OpsError> {
                    let count = i128::from(self);
                    if count < 0 {
                        return Err(OpsError::NegativeCount {
                            operation,
                            argument,
                            count,
                        });
                    }
                    Ok(usize::try_from(self).unwrap_or(usize::MAX))
                }
            }
        )*
    };
}

impl_count!(i8, i16, i32, i64, u8, u16, u32, u64);

impl sealed::Sealed for isize {}

impl Count for isize {
    #[inline]
    fn to_count(self, operation: &'static str, argument: &'static str) -> Result<usize, OpsError> {
        i64::try_from(self)
            .unwrap_or(i64::MAX)
            .to_count(operation, argument)
    }
}

impl sealed::Sealed for usize {}

impl Count for usize {
    #[inline]
    fn to_count(self, _operation: &'static str, _argument: &'static str) -> Result<usize, OpsError> {
        Ok(self)
    }
}
