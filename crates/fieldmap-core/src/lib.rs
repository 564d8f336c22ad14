//! **fieldmap-core**: occupancy field model and text map codec.
//!
//! A field is a rectangle of [`Cell`]s holding one start, one finish and
//! any number of rectangular obstacles. [`FieldSpec::build`] rasterizes it,
//! [`codec::encode`] turns it into the space-separated wire text and
//! [`codec::decode`] reads that text back at doubled horizontal resolution.

pub mod cell;
pub mod codec;
pub mod error;
pub mod field;
pub mod geom;
pub mod grid;

pub use cell::{Cell, PATH_GLYPH};
pub use error::DecodeError;
pub use field::{FieldSpec, Obstacle};
pub use geom::{Point, Range};
pub use grid::Grid;
