//! Physical state model shared by every problem setup: the eight-field
//! state vector, partial overrides of it, and the errors raised while
//! building setups.

pub mod error;
pub mod geometry;
pub mod state;

pub use error::{ConfigurationError, Error};
pub use state::{StateOverride, StateVector, NUM_FIELDS};
