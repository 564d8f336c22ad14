//! Path search over decoded field maps.
//!
//! A decoded map has a separator column between every two real columns
//! (see `fieldmap_core::codec`). [`FieldPather`] encodes the movement
//! rule on such a map: sideways moves may cross separators, vertical moves
//! may not land on them. [`PathRange::bfs_path`] runs a breadth-first
//! search with the fixed expansion order [`SEARCH_ORDER`], returning the
//! path with the fewest moves.
//!
//! The path cost ([`path_cost`]) and the display overlay ([`render`]) are
//! derived from a finished search and never influence it. [`solve`] chains
//! the whole decode-side pass.

mod bfs;
mod distance;
mod error;
mod field;
mod metric;
mod neighbors;
mod path;
mod pathrange;
mod render;
mod solve;
mod traits;

pub use distance::manhattan;
pub use error::SolveError;
pub use field::FieldPather;
pub use metric::{path_cost, separator_count};
pub use neighbors::{Direction, SEARCH_ORDER, cardinal};
pub use path::Path;
pub use pathrange::PathRange;
pub use render::render;
pub use solve::{Solution, find_markers, solve, solve_in};
pub use traits::Pather;
