use serde::{Deserialize, Serialize};




#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]

/**
 * A 3D vector, used for the velocity and magnetic field of a state
 */
pub struct Vector3d(f64, f64, f64);




// ============================================================================
impl Vector3d {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3d(x, y, z)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn component(&self, direction: Direction) -> f64 {
        match direction {
            Direction::I => self.0,
            Direction::J => self.1,
            Direction::K => self.2,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.0, self.1, self.2]
    }

    /**
     * Return a copy of this vector with the components along the two given
     * directions exchanged. Swapping a direction with itself is the identity.
     */
    pub fn swap(&self, a: Direction, b: Direction) -> Self {
        let mut data = self.as_array();
        data.swap(a.index(), b.index());
        data.into()
    }
}

impl From<[f64; 3]> for Vector3d {
    fn from(a: [f64; 3]) -> Self {
        Vector3d(a[0], a[1], a[2])
    }
}

impl From<Vector3d> for [f64; 3] {
    fn from(v: Vector3d) -> Self {
        v.as_array()
    }
}




/**
 * Enum to hold a unit vector in 3D space
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    I,
    J,
    K,
}

// ============================================================================
impl Direction {
    pub fn along(&self, other: Direction) -> f64 {
        if *self == other {
            1.0
        } else {
            0.0
        }
    }

    /**
     * The array axis this direction points along.
     */
    pub fn index(&self) -> usize {
        match self {
            Direction::I => 0,
            Direction::J => 1,
            Direction::K => 2,
        }
    }
}
