use crate::hydro::error::Error;
use crate::index_space::MAX_RANK;
use super::{Coordinates, RegionClassifier};

pub const REGION_NAMES: [&str; 4] = ["NE", "NW", "SE", "SW"];




/**
 * Four-state geometry on a 2D grid. East means a positive first coordinate
 * and north a positive second coordinate; a coordinate of exactly zero
 * counts as west or south.
 */
#[derive(Clone, Copy, Debug, Default)]
pub struct QuadrantSplit;

impl RegionClassifier for QuadrantSplit {

    fn region_names(&self) -> &'static [&'static str] {
        &REGION_NAMES
    }

    fn check_rank(&self, rank: usize) -> Result<(), Error> {
        match rank {
            2 => Ok(()),
            _ => Err(Error::UnsupportedDimensionality { geometry: "quadrant", rank }),
        }
    }

    fn region_of(&self, coordinates: &Coordinates, index: [usize; MAX_RANK]) -> usize {
        let east = coordinates.along(0, index[0]) > 0.0;
        let north = coordinates.along(1, index[1]) > 0.0;

        match (north, east) {
            (true, true) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        }
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::*;

    fn region_name(coordinates: &Coordinates, index: [usize; MAX_RANK]) -> &'static str {
        REGION_NAMES[QuadrantSplit.region_of(coordinates, index)]
    }

    #[test]
    fn corners_map_to_compass_quadrants() {
        let coordinates = Coordinates::new(&[2, 2]);
        assert_eq!(region_name(&coordinates, [1, 1, 0]), "NE");
        assert_eq!(region_name(&coordinates, [0, 1, 0]), "NW");
        assert_eq!(region_name(&coordinates, [1, 0, 0]), "SE");
        assert_eq!(region_name(&coordinates, [0, 0, 0]), "SW");
    }

    #[test]
    fn zero_coordinates_fall_south_and_west() {
        let coordinates = Coordinates::new(&[3, 3]);
        assert_eq!(region_name(&coordinates, [1, 1, 0]), "SW");
        assert_eq!(region_name(&coordinates, [2, 1, 0]), "SE");
        assert_eq!(region_name(&coordinates, [1, 2, 0]), "NW");
    }

    #[test]
    fn only_two_dimensions_are_supported() {
        assert!(QuadrantSplit.check_rank(2).is_ok());
        assert!(QuadrantSplit.check_rank(1).is_err());
        assert!(QuadrantSplit.check_rank(3).is_err());
    }
}
