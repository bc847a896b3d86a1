//! The calculation contract.

use crate::types::CalcError;

/// An input record that can be evaluated into a result record.
///
/// Implementations validate every field before computing anything and
/// must be pure: the same input always yields the same output, and no
/// state survives between calls.
///
/// ```
/// use calc_core::traits::Calculate;
/// use calc_core::types::{validate::ensure_positive, CalcError};
///
/// struct Square { side: f64 }
///
/// impl Calculate for Square {
///     type Output = f64;
///
///     fn calculate(&self) -> Result<f64, CalcError> {
///         let side = ensure_positive("side", self.side)?;
///         Ok(side * side)
///     }
/// }
///
/// assert_eq!(Square { side: 3.0 }.calculate().unwrap(), 9.0);
/// assert!(Square { side: 0.0 }.calculate().is_err());
/// ```
pub trait Calculate {
    /// Result record produced by a successful calculation.
    type Output;

    /// Validates the input and runs the formula.
    ///
    /// # Errors
    /// Returns [`CalcError`] when a field is missing, out of range, or the
    /// inputs violate a domain invariant. No partial result is produced.
    fn calculate(&self) -> Result<Self::Output, CalcError>;
}
