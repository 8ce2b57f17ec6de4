//! `SparseStore3`: a fill-once, coordinate-addressed 3D container.
//!
//! Only written cells occupy memory. Every other in-bounds cell reads as the
//! policy's empty value. Memory is proportional to the number of populated
//! cells rather than `max_x * max_y * max_z`, at the price of a hash lookup
//! per access.

use std::sync::Arc;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use itertools::Itertools;

use crate::collections_error::CollectionsError;
use crate::debug_invariants::DebugInvariants;
use crate::sparse::bounds::Bounds;
use crate::sparse::key::CoordKey;
use crate::sparse::policy::EmptinessPolicy;

/// Sparse 3D store mapping `(x, y, z)` to values of type `T`.
///
/// - `bounds`: exclusive upper bound per axis, all strictly positive.
/// - `cells`:  populated cells only; absent keys are empty cells.
/// - `policy`: shared emptiness policy.
///
/// Cells are written at most once; a second write to the same coordinate
/// fails with [`CollectionsError::DuplicateCoordinate`]. There is no
/// per-cell removal.
#[derive(Debug)]
pub struct SparseStore3<T, P> {
    bounds: Bounds,
    cells: HashMap<CoordKey, T>,
    policy: Arc<P>,
}

impl<T: Clone, P> Clone for SparseStore3<T, P> {
    /// Copies the cells; the clone shares the policy.
    fn clone(&self) -> Self {
        Self {
            bounds: self.bounds,
            cells: self.cells.clone(),
            policy: Arc::clone(&self.policy),
        }
    }
}

impl<T, P> SparseStore3<T, P>
where
    P: EmptinessPolicy<T>,
{
    /// Creates an empty store over `bounds`, sharing `policy`.
    pub fn new(bounds: Bounds, policy: Arc<P>) -> Result<Self, CollectionsError> {
        bounds.validate()?;
        log::debug!(
            "SparseStore3: new store {}x{}x{} with policy {:?}",
            bounds.max_x,
            bounds.max_y,
            bounds.max_z,
            policy
        );
        Ok(Self {
            bounds,
            cells: HashMap::new(),
            policy,
        })
    }

    /// Creates an empty store that owns a fresh handle to `policy`.
    pub fn with_policy(bounds: Bounds, policy: P) -> Result<Self, CollectionsError> {
        Self::new(bounds, Arc::new(policy))
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The shared policy handle; clone it to build further stores.
    #[inline]
    pub fn policy(&self) -> &Arc<P> {
        &self.policy
    }

    /// Number of populated cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Validates `(x, y, z)` and encodes it.
    pub fn key(&self, x: i64, y: i64, z: i64) -> Result<CoordKey, CollectionsError> {
        self.bounds.check(x, y, z).map(CoordKey::from)
    }

    /// Writes `value` into an unpopulated cell.
    ///
    /// # Errors
    /// - [`CollectionsError::CoordinateOutOfRange`] if any axis is outside its bound.
    /// - [`CollectionsError::DuplicateCoordinate`] if the cell was already written;
    ///   the stored value is left untouched.
    pub fn set(&mut self, x: i64, y: i64, z: i64, value: T) -> Result<(), CollectionsError> {
        let key = self.key(x, y, z)?;
        match self.cells.entry(key) {
            Entry::Occupied(_) => {
                log::warn!("SparseStore3: rejected second write to cell {key}");
                return Err(CollectionsError::DuplicateCoordinate(key));
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
        // Earlier cells were checked when they were written.
        crate::debug_invariants!(@check self.check_cell(key), "SparseStore3::set");
        Ok(())
    }

    /// Returns the written value, or `None` for a cell that was never set.
    ///
    /// Unlike [`get`](Self::get) this never confuses a stored value that
    /// happens to equal the empty value with an absent one.
    pub fn try_get(&self, x: i64, y: i64, z: i64) -> Result<Option<&T>, CollectionsError> {
        let key = self.key(x, y, z)?;
        Ok(self.cells.get(&key))
    }

    /// Returns the written value, or the policy's empty value.
    pub fn get(&self, x: i64, y: i64, z: i64) -> Result<T, CollectionsError>
    where
        T: Clone,
    {
        Ok(self
            .try_get(x, y, z)?
            .cloned()
            .unwrap_or_else(|| self.policy.empty_value()))
    }

    /// Returns `true` if the cell has been written.
    pub fn contains(&self, x: i64, y: i64, z: i64) -> Result<bool, CollectionsError> {
        Ok(self.try_get(x, y, z)?.is_some())
    }

    /// Populated cells in layer-major order (`z`, then `y`, then `x`).
    pub fn iter(&self) -> impl Iterator<Item = (CoordKey, &T)> + '_ {
        self.cells
            .iter()
            .map(|(&key, value)| (key, value))
            .sorted_by_key(|&(key, _)| key)
    }

    /// Checks one stored key: inside the bounds, and its text form decodes
    /// back to itself.
    fn check_cell(&self, key: CoordKey) -> Result<(), CollectionsError> {
        let (x, y, z) = key.to_tuple();
        if !self.bounds.contains(x, y, z) {
            return Err(CollectionsError::InvariantViolation(format!(
                "stored key {key} lies outside bounds {:?}",
                self.bounds
            )));
        }
        let decoded: CoordKey = key.to_string().parse()?;
        if decoded != key {
            return Err(CollectionsError::InvariantViolation(format!(
                "key {key} decodes to {decoded}"
            )));
        }
        Ok(())
    }

    /// The stored value at `key` unless the policy deems it empty.
    pub(crate) fn visible_cell(&self, key: CoordKey) -> Option<&T> {
        self.cells
            .get(&key)
            .filter(|value| !self.policy.is_empty(value))
    }
}

impl<T, P> DebugInvariants for SparseStore3<T, P>
where
    P: EmptinessPolicy<T>,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self, "SparseStore3");
    }

    fn validate_invariants(&self) -> Result<(), CollectionsError> {
        self.cells.keys().try_for_each(|&key| self.check_cell(key))
    }
}
