//! `CoordKey`: the map key of a sparse store cell.
//!
//! The key hashes structurally on its three components, so distinct
//! coordinates never collide. Its textual form is `x_y_z` in decimal; `_`
//! cannot occur inside a non-negative decimal integer, which keeps the text
//! encoding collision-free as well and lets keys be decoded back.

use std::fmt;
use std::str::FromStr;

use crate::collections_error::CollectionsError;

const SEPARATOR: char = '_';

/// Encoded `(x, y, z)` coordinate of a populated cell.
///
/// Ordering is layer-major: `z`, then `y`, then `x`, which matches the order
/// in which stores render their cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct CoordKey {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl CoordKey {
    #[inline]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Components as an `(x, y, z)` tuple.
    #[inline]
    pub const fn to_tuple(self) -> (usize, usize, usize) {
        (self.x, self.y, self.z)
    }
}

impl Ord for CoordKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.z, self.y, self.x).cmp(&(other.z, other.y, other.x))
    }
}

impl PartialOrd for CoordKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for CoordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CoordKey")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .finish()
    }
}

impl fmt::Display for CoordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}{SEPARATOR}{}", self.x, self.y, self.z)
    }
}

impl FromStr for CoordKey {
    type Err = CollectionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CollectionsError::MalformedKey(s.to_string());
        let mut parts = s.split(SEPARATOR);
        let mut next = || -> Result<usize, CollectionsError> {
            let part = parts.next().ok_or_else(malformed)?;
            // `usize::from_str` accepts a leading `+`; keys never carry one.
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse().map_err(|_| malformed())
        };
        let key = CoordKey::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(malformed());
        }
        Ok(key)
    }
}

impl From<(usize, usize, usize)> for CoordKey {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_size, assert_impl_all};

    assert_eq_size!(CoordKey, [usize; 3]);
    assert_impl_all!(CoordKey: Copy, Send, Sync, std::hash::Hash, Ord);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse() {
        let k = CoordKey::new(12, 0, 7);
        assert_eq!(k.to_string(), "12_0_7");
        assert_eq!("12_0_7".parse::<CoordKey>(), Ok(k));
        assert_eq!(format!("{k:?}"), "CoordKey(12, 0, 7)");
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "1_2", "1_2_3_4", "1__3", "a_2_3", "+1_2_3", "-1_2_3", "1 _2_3"] {
            assert_eq!(
                bad.parse::<CoordKey>(),
                Err(CollectionsError::MalformedKey(bad.to_string())),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn text_encoding_distinguishes_digit_splits() {
        // Plain concatenation would map both of these to "1112".
        let a = CoordKey::new(1, 11, 2).to_string();
        let b = CoordKey::new(11, 1, 2).to_string();
        assert_ne!(a, b);
    }

    #[test]
    fn ordering_is_layer_major() {
        let mut keys = vec![
            CoordKey::new(2, 0, 0),
            CoordKey::new(0, 0, 1),
            CoordKey::new(0, 1, 0),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                CoordKey::new(2, 0, 0),
                CoordKey::new(0, 1, 0),
                CoordKey::new(0, 0, 1)
            ]
        );
    }
}
