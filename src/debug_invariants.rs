//! Structural self-checks for containers.
//!
//! [`DebugInvariants::validate_invariants`] walks a container and reports
//! the first broken invariant. Mutating operations call it through the
//! [`debug_invariants!`](crate::debug_invariants!) macro, which compiles to
//! nothing unless debug assertions or the `strict-invariants` /
//! `check-invariants` features are on.

use crate::collections_error::CollectionsError;

/// Trait for validating container invariants.
pub trait DebugInvariants {
    /// Panics if an invariant is broken, when invariant checking is enabled.
    fn debug_assert_invariants(&self);

    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), CollectionsError>;
}

/// Validates `$target`'s invariants and panics with `$ctx` on failure when
/// invariant checking is enabled.
///
/// The `@check` form evaluates a narrower `Result`-returning check instead of
/// the full walk; the expression is not evaluated when checking is off.
#[macro_export]
macro_rules! debug_invariants {
    (@check $check:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $check {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
    ($target:expr, $($ctx:tt)*) => {
        $crate::debug_invariants!(
            @check $crate::debug_invariants::DebugInvariants::validate_invariants($target),
            $($ctx)*
        )
    };
}
