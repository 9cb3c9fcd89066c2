use crate::hydro::error::Error;
use crate::hydro::geometry::Direction;
use crate::hydro::state::StateVector;
use crate::index_space::MAX_RANK;
use super::{Coordinates, Orientation, RegionClassifier};

pub const REGION_NAMES: [&str; 2] = ["left", "right"];




/**
 * Shock-tube geometry: the domain is cut in half along one axis. Cells with
 * an index below `n / 2` on the split axis are in the left region, and the
 * rest are in the right region.
 *
 * On a 2D grid the split may be made along the second axis instead of the
 * first (orientation `Y`). The jump conditions are then rotated to match:
 * the first two components of the velocity and magnetic field are exchanged
 * in both states. On a 1D grid the orientation has no effect.
 */
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanarSplit {
    orientation: Orientation,
}

impl PlanarSplit {

    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    fn split_axis(&self, rank: usize) -> usize {
        if rank == 1 {
            0
        } else {
            self.orientation.direction().index()
        }
    }
}

impl RegionClassifier for PlanarSplit {

    fn region_names(&self) -> &'static [&'static str] {
        &REGION_NAMES
    }

    fn check_rank(&self, rank: usize) -> Result<(), Error> {
        match rank {
            1 | 2 => Ok(()),
            _ => Err(Error::UnsupportedDimensionality { geometry: "planar", rank }),
        }
    }

    fn region_of(&self, coordinates: &Coordinates, index: [usize; MAX_RANK]) -> usize {
        let axis = self.split_axis(coordinates.rank());

        if index[axis] < coordinates.len(axis) / 2 {
            0
        } else {
            1
        }
    }

    fn orient(&self, states: &[StateVector], rank: usize) -> Vec<StateVector> {
        match (self.orientation, rank) {
            (Orientation::Y, 2) => states
                .iter()
                .map(|s| s.swap_components(Direction::I, Direction::J))
                .collect(),
            _ => states.to_vec(),
        }
    }
}
