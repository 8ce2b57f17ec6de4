//! # figure-collections
//!
//! Generic in-memory containers for polymorphic geometric figures.
//!
//! ## Containers
//! - [`SparseStore3`](sparse::SparseStore3): a bounded, coordinate-addressed
//!   3D store that keeps only written cells. What an unwritten cell reads as
//!   is decided by a pluggable [`EmptinessPolicy`](sparse::EmptinessPolicy).
//!   Cells are fill-once: writing a coordinate twice is an error.
//! - [`SimpleList`](list::SimpleList): a singly-linked list with O(1) append,
//!   position-based access by walking the chain, and an in-place quicksort.
//! - [`SimpleStack`](list::SimpleStack): a LIFO view over a `SimpleList`.
//!
//! The containers are generic; [`Figure`](figure::Figure) is the value type
//! they are usually filled with.
//!
//! ## Invariant checking
//! Containers implement [`DebugInvariants`]. Mutating operations re-check
//! invariants in debug builds and when the `strict-invariants` or
//! `check-invariants` feature is enabled.
//!
//! ## Logging
//! The crate logs through the [`log`] facade and never installs a logger.
//!
//! ```rust
//! use figure_collections::prelude::*;
//!
//! let mut store = SparseStore3::with_policy(Bounds::cube(3)?, OptionPolicy)?;
//! store.set(1, 1, 1, Some(Figure::square(5.0)))?;
//! assert_eq!(store.get(0, 0, 0)?, None);
//!
//! let mut list: SimpleList<Figure> =
//!     [Figure::rectangle(30.0, 40.0), Figure::square(5.0)].into_iter().collect();
//! list.sort();
//! assert_eq!(list.get(0)?.name(), "Square");
//! # Ok::<(), CollectionsError>(())
//! ```

pub mod collections_error;
pub mod debug_invariants;
pub mod figure;
pub mod list;
pub mod sparse;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::collections_error::CollectionsError;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::figure::Figure;
    pub use crate::list::{SimpleList, SimpleStack};
    pub use crate::sparse::{
        Axis, Bounds, CoordKey, DefaultPolicy, EmptinessPolicy, OptionPolicy, SentinelPolicy,
        SparseStore3,
    };
}
