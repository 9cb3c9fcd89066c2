//! Piecewise-constant initial conditions for hydrodynamics and
//! magnetohydrodynamics test problems on structured 1D, 2D, and 3D grids.
//!
//! A `Problem` partitions the normalized domain `[-1, 1]^k` into named
//! regions (the two halves of a shock tube, the inside and outside of a
//! cylinder, or four quadrants) and assigns each region a state of density,
//! pressure, velocity, and magnetic field. `Problem::initial_model` lays
//! those states down on a dense grid of shape `(d_1, ..., d_k, Nq)`, ready to
//! be consumed by a solver.
//!
//! ```
//! use hydro_testbench::hydro::StateOverride;
//! use hydro_testbench::setup::Preset;
//!
//! let problem = Preset::SrShockTube1
//!     .builder()
//!     .region("right", StateOverride::new().pressure(0.1))
//!     .build()
//!     .unwrap();
//! let grid = problem.initial_model(&[4], 8).unwrap();
//! assert_eq!(grid.get_slice(&[3])[1], 0.1);
//! ```

pub mod config;
pub mod grid;
pub mod hydro;
pub mod index_space;
pub mod setup;

pub use config::ProblemConfig;
pub use grid::Grid;
pub use hydro::{ConfigurationError, Error, StateOverride, StateVector};
pub use setup::{Geometry, Orientation, Preset, Problem};
