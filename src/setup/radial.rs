use crate::hydro::error::Error;
use crate::index_space::MAX_RANK;
use super::{Coordinates, RegionClassifier};

pub const REGION_NAMES: [&str; 2] = ["inside", "outside"];

/**
 * Radius of the inner region, in normalized coordinates.
 */
pub const CYLINDER_RADIUS: f64 = 0.16;




/**
 * Cylindrical (2D) or spherical (3D) geometry: cells strictly closer to the
 * domain center than the radius are inside, all others are outside.
 */
#[derive(Clone, Copy, Debug)]
pub struct RadialSplit {
    radius: f64,
}

impl Default for RadialSplit {
    fn default() -> Self {
        Self { radius: CYLINDER_RADIUS }
    }
}

impl RadialSplit {
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl RegionClassifier for RadialSplit {

    fn region_names(&self) -> &'static [&'static str] {
        &REGION_NAMES
    }

    fn check_rank(&self, rank: usize) -> Result<(), Error> {
        match rank {
            2 | 3 => Ok(()),
            _ => Err(Error::UnsupportedDimensionality { geometry: "radial", rank }),
        }
    }

    fn region_of(&self, coordinates: &Coordinates, index: [usize; MAX_RANK]) -> usize {
        if coordinates.radius(index) < self.radius {
            0
        } else {
            1
        }
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn center_is_inside_and_corners_are_outside() {
        let split = RadialSplit::default();
        let coordinates = Coordinates::new(&[11, 11]);
        assert_eq!(split.region_of(&coordinates, [5, 5, 0]), 0);
        assert_eq!(split.region_of(&coordinates, [0, 0, 0]), 1);
        assert_eq!(split.region_of(&coordinates, [10, 0, 0]), 1);
    }

    #[test]
    fn spheres_use_all_three_axes() {
        let split = RadialSplit::default();
        let coordinates = Coordinates::new(&[21, 21, 21]);

        // offset by 0.1 on two axes is inside, on all three is outside
        assert_eq!(split.region_of(&coordinates, [11, 11, 10]), 0);
        assert_eq!(split.region_of(&coordinates, [11, 11, 11]), 1);
    }

    #[test]
    fn boundary_radius_is_outside() {
        let split = RadialSplit { radius: 0.5 };
        let coordinates = Coordinates::new(&[5, 5]);
        assert_eq!(split.region_of(&coordinates, [3, 2, 0]), 1);
        assert_eq!(split.region_of(&coordinates, [2, 2, 0]), 0);
    }

    #[test]
    fn one_dimension_is_unsupported() {
        let split = RadialSplit::default();
        assert!(split.check_rank(2).is_ok());
        assert!(split.check_rank(3).is_ok());
        assert!(matches!(split.check_rank(1), Err(Error::UnsupportedDimensionality { rank: 1, .. })));
    }
}
