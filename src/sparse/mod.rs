//! Sparse, coordinate-addressed 3D storage.
//!
//! A [`SparseStore3`] is built from [`Bounds`] and an [`EmptinessPolicy`].
//! Cells are written at most once and every unwritten cell reads as the
//! policy's empty value.

pub mod bounds;
pub mod key;
pub mod policy;
pub mod render;
pub mod store;

pub use bounds::{Axis, Bounds};
pub use key::CoordKey;
pub use policy::{DefaultPolicy, EmptinessPolicy, OptionPolicy, SentinelPolicy};
pub use render::EMPTY_CELL;
pub use store::SparseStore3;
