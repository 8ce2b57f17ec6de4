//! Text rendering of sparse stores.
//!
//! Layout, one block per `z` layer:
//!
//! ```text
//!
//! Part number 1:
//! [A	 - 	 - ]
//! [ - 	 - 	 - ]
//! ```
//!
//! Cells in a row are tab-separated and rows are bracketed. A cell whose
//! value the policy deems empty, or that was never written, shows
//! [`EMPTY_CELL`].

use std::fmt::{self, Write};

use itertools::Itertools;

use crate::sparse::key::CoordKey;
use crate::sparse::policy::EmptinessPolicy;
use crate::sparse::store::SparseStore3;

/// Placeholder text of an empty cell.
pub const EMPTY_CELL: &str = " - ";

impl<T, P> SparseStore3<T, P>
where
    P: EmptinessPolicy<T>,
{
    /// Renders the store, formatting non-empty cells with `cell_text`.
    ///
    /// Use this when `T` has no `Display` impl of its own, e.g. `Option<U>`.
    pub fn render_with<F>(&self, cell_text: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        let mut out = String::new();
        self.write_layers(&mut out, cell_text)
            .expect("writing into a String cannot fail");
        out
    }

    fn write_layers<W, F>(&self, out: &mut W, mut cell_text: F) -> fmt::Result
    where
        W: Write,
        F: FnMut(&T) -> String,
    {
        let bounds = self.bounds();
        for z in 0..bounds.max_z {
            write!(out, "\nPart number {}:\n", z + 1)?;
            for y in 0..bounds.max_y {
                let row = (0..bounds.max_x).format_with("\t", |x, emit| {
                    match self.visible_cell(CoordKey::new(x, y, z)) {
                        Some(value) => emit(&cell_text(value)),
                        None => emit(&EMPTY_CELL),
                    }
                });
                writeln!(out, "[{row}]")?;
            }
        }
        Ok(())
    }
}

impl<T, P> fmt::Display for SparseStore3<T, P>
where
    T: fmt::Display,
    P: EmptinessPolicy<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_layers(f, |value| value.to_string())
    }
}
