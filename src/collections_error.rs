//! CollectionsError: Unified error type for figure-collections public APIs
//!
//! Every fallible container operation returns this error so callers can
//! match on the failure kind instead of parsing messages.

use thiserror::Error;

use crate::sparse::bounds::Axis;
use crate::sparse::key::CoordKey;

/// Unified error type for container operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionsError {
    /// A coordinate fell outside `[0, bound)` on the given axis.
    #[error("{axis} = {value} is out of range [0, {bound})")]
    CoordinateOutOfRange { axis: Axis, value: i64, bound: usize },
    /// The cell was already written; sparse stores are fill-once.
    #[error("cell {0} is already populated")]
    DuplicateCoordinate(CoordKey),
    /// A store was constructed with a zero-sized axis.
    #[error("bound on axis {axis} must be positive")]
    InvalidBounds { axis: Axis },
    /// A textual coordinate key could not be decoded.
    #[error("malformed coordinate key `{0}` (expected `x_y_z`)")]
    MalformedKey(String),
    /// A list position was outside `[0, len)`.
    #[error("position {position} is out of range for a list of length {len}")]
    PositionOutOfRange { position: usize, len: usize },
    /// A structural invariant does not hold.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
