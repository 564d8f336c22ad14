//! Field map nodes.
//!
//! A [`FieldCreator`] builds a field from a [`FieldSpec`](fieldmap_core::FieldSpec),
//! encodes it and publishes it on a [`Bus`] topic. A [`FieldSolver`]
//! subscribed to the same topic decodes each map, searches it and reports
//! the rendered path and its cost.

pub mod bus;
pub mod config;
pub mod creator;
pub mod error;
pub mod params;
pub mod solver;

pub use bus::{Bus, Subscription};
pub use config::NodeConfig;
pub use creator::FieldCreator;
pub use error::{BusError, Error, ParamsError, Result};
pub use solver::{FieldSolver, Outcome};
