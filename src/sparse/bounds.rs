//! Axis bounds for [`SparseStore3`](crate::sparse::SparseStore3).
//!
//! A store addresses cells by `(x, y, z)` with each coordinate in
//! `[0, max)` for its axis. Coordinates arrive as `i64` so that negative
//! input is reported as an out-of-range error instead of being rejected by
//! the type system at the call site.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collections_error::CollectionsError;

/// One of the three store axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// Exclusive upper bounds of a 3D store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub max_x: usize,
    pub max_y: usize,
    pub max_z: usize,
}

impl Bounds {
    /// Creates bounds, rejecting any zero-sized axis.
    pub fn new(max_x: usize, max_y: usize, max_z: usize) -> Result<Self, CollectionsError> {
        let bounds = Self {
            max_x,
            max_y,
            max_z,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// A cube with the same bound on every axis.
    pub fn cube(side: usize) -> Result<Self, CollectionsError> {
        Self::new(side, side, side)
    }

    /// Checks that every axis is strictly positive.
    ///
    /// Deserialized bounds bypass [`Bounds::new`], so stores call this again
    /// at construction.
    pub fn validate(&self) -> Result<(), CollectionsError> {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            if self.bound(axis) == 0 {
                return Err(CollectionsError::InvalidBounds { axis });
            }
        }
        Ok(())
    }

    /// Bound of a single axis.
    #[inline]
    pub fn bound(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.max_x,
            Axis::Y => self.max_y,
            Axis::Z => self.max_z,
        }
    }

    /// Total number of addressable cells.
    pub fn cell_count(&self) -> usize {
        self.max_x
            .saturating_mul(self.max_y)
            .saturating_mul(self.max_z)
    }

    /// Validates `(x, y, z)` in axis order and returns the unsigned triple.
    ///
    /// The first offending axis is reported.
    pub fn check(&self, x: i64, y: i64, z: i64) -> Result<(usize, usize, usize), CollectionsError> {
        Ok((
            self.check_axis(Axis::X, x)?,
            self.check_axis(Axis::Y, y)?,
            self.check_axis(Axis::Z, z)?,
        ))
    }

    /// Returns `true` if the unsigned triple lies inside the bounds.
    #[inline]
    pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.max_x && y < self.max_y && z < self.max_z
    }

    fn check_axis(&self, axis: Axis, value: i64) -> Result<usize, CollectionsError> {
        let bound = self.bound(axis);
        usize::try_from(value)
            .ok()
            .filter(|&v| v < bound)
            .ok_or(CollectionsError::CoordinateOutOfRange { axis, value, bound })
    }
}
