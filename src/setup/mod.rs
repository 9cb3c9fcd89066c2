//! Piecewise-constant initial conditions. A problem is a geometric partition
//! of the normalized domain `[-1, 1]^k` into named regions, each of which is
//! assigned one `StateVector`. The partition is chosen by a `Geometry` tag,
//! and implemented by one `RegionClassifier` per geometry.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::hydro::error::{ConfigurationError, Error};
use crate::hydro::geometry::Direction;
use crate::hydro::state::StateVector;
use crate::index_space::MAX_RANK;

pub mod planar;
pub mod presets;
pub mod problem;
pub mod quadrant;
pub mod radial;

pub use planar::PlanarSplit;
pub use presets::Preset;
pub use problem::{Problem, ProblemBuilder};
pub use quadrant::QuadrantSplit;
pub use radial::RadialSplit;




/**
 * A strategy for assigning every cell of a grid to one of a fixed set of
 * named regions.
 */
pub trait RegionClassifier: Sync {

    /// The region names, in the order the state table is given.
    fn region_names(&self) -> &'static [&'static str];

    /// Fail unless grids with this many spatial axes can be classified.
    fn check_rank(&self, rank: usize) -> Result<(), Error>;

    /// Return the position in `region_names` of the region containing the
    /// cell at `index`.
    fn region_of(&self, coordinates: &Coordinates, index: [usize; MAX_RANK]) -> usize;

    /// Return the state table as it should be laid down on a grid with the
    /// given number of spatial axes. The default is the table unchanged.
    fn orient(&self, states: &[StateVector], _rank: usize) -> Vec<StateVector> {
        states.to_vec()
    }
}




#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]

/**
 * The kind of geometric partition a problem uses.
 */
pub enum Geometry {
    Planar,
    Radial,
    Quadrant,
}




// ============================================================================
impl Geometry {

    pub fn name(&self) -> &'static str {
        match self {
            Geometry::Planar => "planar",
            Geometry::Radial => "radial",
            Geometry::Quadrant => "quadrant",
        }
    }

    pub fn region_names(&self) -> &'static [&'static str] {
        self.classifier(Orientation::X).region_names()
    }

    /**
     * Return the classifier implementing this geometry. The orientation is
     * only meaningful for planar problems.
     */
    pub fn classifier(&self, orientation: Orientation) -> Box<dyn RegionClassifier> {
        match self {
            Geometry::Planar => Box::new(PlanarSplit::new(orientation)),
            Geometry::Radial => Box::new(RadialSplit::default()),
            Geometry::Quadrant => Box::new(QuadrantSplit),
        }
    }

    /**
     * Return the position of the named region, or an error listing the
     * names this geometry knows about.
     */
    pub fn region_index(&self, region: &str) -> Result<usize, ConfigurationError> {
        let names = self.region_names();
        names
            .iter()
            .position(|&name| name == region)
            .ok_or_else(|| ConfigurationError::UnknownRegion {
                region: region.to_string(),
                expected: names,
            })
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}




#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]

/**
 * Which spatial axis a planar problem is split along. Only two-dimensional
 * grids can be split along `Y`.
 */
pub enum Orientation {
    X,
    Y,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::X
    }
}

impl Orientation {
    pub fn direction(&self) -> Direction {
        match self {
            Orientation::X => Direction::I,
            Orientation::Y => Direction::J,
        }
    }
}

impl FromStr for Orientation {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Orientation::X),
            "y" => Ok(Orientation::Y),
            _ => Err(ConfigurationError::MalformedField {
                field: "orientation".to_string(),
                reason: format!("'{}' is not one of x, y", s),
            }),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::X => write!(fmt, "x"),
            Orientation::Y => write!(fmt, "y"),
        }
    }
}




/**
 * Return `n` evenly spaced values on the closed interval `[-1, 1]`. The end
 * points are exact, as is the midpoint `0.0` when `n` is odd. A single point
 * sits at `-1`.
 */
pub fn linspace(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![-1.0],
        _ => (0..n).map(|i| -1.0 + (2 * i) as f64 / (n - 1) as f64).collect(),
    }
}




/**
 * The normalized coordinates of every cell center along each spatial axis
 * of a grid.
 */
pub struct Coordinates {
    axes: Vec<Vec<f64>>,
}

impl Coordinates {

    pub fn new(shape: &[usize]) -> Self {
        Self {
            axes: shape.iter().map(|&n| linspace(n)).collect(),
        }
    }

    pub fn rank(&self) -> usize {
        self.axes.len()
    }

    /**
     * The number of cells along one axis.
     */
    pub fn len(&self, axis: usize) -> usize {
        self.axes[axis].len()
    }

    /**
     * The normalized coordinate of the given index along one axis.
     */
    pub fn along(&self, axis: usize, index: usize) -> f64 {
        self.axes[axis][index]
    }

    /**
     * The Euclidean distance of a cell from the origin, over the spatial
     * axes present.
     */
    pub fn radius(&self, index: [usize; MAX_RANK]) -> f64 {
        self.axes
            .iter()
            .zip(index.iter())
            .map(|(x, &i)| x[i] * x[i])
            .sum::<f64>()
            .sqrt()
    }
}
