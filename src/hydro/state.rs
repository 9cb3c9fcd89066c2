use serde::{Deserialize, Serialize};
use super::error::ConfigurationError;
use super::geometry::{Direction, Vector3d};




/**
 * Number of scalars in a flattened state: density, pressure, three velocity
 * components, and three magnetic field components, in that order.
 */
pub const NUM_FIELDS: usize = 8;

/**
 * The legal keys of a state override.
 */
pub const FIELD_NAMES: [&str; 4] = ["density", "pressure", "velocity", "field"];




#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]

/**
 * The physical state assigned to every cell of a region. The order of the
 * fields here is the order of the last axis of a generated grid.
 */
pub struct StateVector {
    pub density: f64,
    pub pressure: f64,
    pub velocity: Vector3d,
    pub field: Vector3d,
}




// ============================================================================
impl StateVector {

    pub fn new(density: f64, pressure: f64, velocity: [f64; 3], field: [f64; 3]) -> Self {
        Self {
            density,
            pressure,
            velocity: velocity.into(),
            field: field.into(),
        }
    }

    pub fn as_array(&self) -> [f64; NUM_FIELDS] {
        let [v1, v2, v3] = self.velocity.as_array();
        let [b1, b2, b3] = self.field.as_array();
        [self.density, self.pressure, v1, v2, v3, b1, b2, b3]
    }

    /**
     * Write the leading fields of this state into a cell. A slice shorter
     * than `NUM_FIELDS` receives only as many fields as it holds; any entries
     * past `NUM_FIELDS` are left untouched.
     */
    pub fn write_to_slice(&self, slice: &mut [f64]) {
        for (x, y) in slice.iter_mut().zip(self.as_array().iter()) {
            *x = *y
        }
    }

    /**
     * Return this state with the vector components along `a` and `b`
     * exchanged, in both the velocity and the magnetic field.
     */
    pub fn swap_components(&self, a: Direction, b: Direction) -> Self {
        Self {
            velocity: self.velocity.swap(a, b),
            field: self.field.swap(a, b),
            ..*self
        }
    }
}




#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]

/**
 * A partial update to a `StateVector`. Fields that are `None` keep the
 * baseline value; the velocity and field vectors are replaced as a whole.
 */
pub struct StateOverride {
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub velocity: Option<Vector3d>,
    #[serde(default)]
    pub field: Option<Vector3d>,
}




// ============================================================================
impl StateOverride {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    pub fn velocity(mut self, velocity: [f64; 3]) -> Self {
        self.velocity = Some(velocity.into());
        self
    }

    pub fn field(mut self, field: [f64; 3]) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /**
     * Assign one field from its textual form, e.g. `("pressure", "0.01")` or
     * `("velocity", "0.0,0.9,0.0")`.
     */
    pub fn set(&mut self, name: &str, text: &str) -> Result<(), ConfigurationError> {
        match name {
            "density" => self.density = Some(parse_scalar(name, text)?),
            "pressure" => self.pressure = Some(parse_scalar(name, text)?),
            "velocity" => self.velocity = Some(parse_vector(name, text)?),
            "field" => self.field = Some(parse_vector(name, text)?),
            _ => return Err(ConfigurationError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    /**
     * Layer another override on top of this one. Fields present in `other`
     * win.
     */
    pub fn update(&mut self, other: &StateOverride) {
        self.density = other.density.or(self.density);
        self.pressure = other.pressure.or(self.pressure);
        self.velocity = other.velocity.or(self.velocity);
        self.field = other.field.or(self.field);
    }

    pub fn apply_to(&self, baseline: &StateVector) -> StateVector {
        StateVector {
            density: self.density.unwrap_or(baseline.density),
            pressure: self.pressure.unwrap_or(baseline.pressure),
            velocity: self.velocity.unwrap_or(baseline.velocity),
            field: self.field.unwrap_or(baseline.field),
        }
    }
}




/**
 * Merge a partial override onto a baseline state.
 */
pub fn merge(baseline: &StateVector, update: &StateOverride) -> StateVector {
    update.apply_to(baseline)
}

fn parse_scalar(name: &str, text: &str) -> Result<f64, ConfigurationError> {
    text.trim().parse().map_err(|_| ConfigurationError::MalformedField {
        field: name.to_string(),
        reason: format!("'{}' is not a number", text),
    })
}

fn parse_vector(name: &str, text: &str) -> Result<Vector3d, ConfigurationError> {
    let values = text
        .split(',')
        .map(|s| parse_scalar(name, s))
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        [x, y, z] => Ok(Vector3d::new(*x, *y, *z)),
        _ => Err(ConfigurationError::MalformedField {
            field: name.to_string(),
            reason: format!("expected 3 components, got {}", values.len()),
        }),
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::*;

    fn baseline() -> StateVector {
        StateVector::new(1.0, 5.0, [0.0, 0.3, 0.4], [1.0, 6.0, 2.0])
    }

    #[test]
    fn flattening_order_is_density_pressure_velocity_field() {
        assert_eq!(baseline().as_array(), [1.0, 5.0, 0.0, 0.3, 0.4, 1.0, 6.0, 2.0]);
    }

    #[test]
    fn empty_override_keeps_baseline() {
        assert_eq!(merge(&baseline(), &StateOverride::new()).as_array(), baseline().as_array());
    }

    #[test]
    fn override_replaces_vectors_wholesale() {
        let update = StateOverride::new().pressure(0.1).velocity([0.5, 0.0, 0.0]);
        let merged = merge(&baseline(), &update);
        assert_eq!(merged.as_array(), [1.0, 0.1, 0.5, 0.0, 0.0, 1.0, 6.0, 2.0]);
    }

    #[test]
    fn write_to_slice_writes_only_leading_fields() {
        let mut short = [0.0; 5];
        baseline().write_to_slice(&mut short);
        assert_eq!(short, [1.0, 5.0, 0.0, 0.3, 0.4]);

        let mut long = [-1.0; 10];
        baseline().write_to_slice(&mut long);
        assert_eq!(long[7], 2.0);
        assert_eq!(long[8..], [-1.0, -1.0]);
    }

    #[test]
    fn textual_assignment_parses_scalars_and_vectors() {
        let mut update = StateOverride::new();
        update.set("density", "10.0").unwrap();
        update.set("field", " 0.5, -1.0 ,0").unwrap();
        assert_eq!(update.density, Some(10.0));
        assert_eq!(update.field, Some(Vector3d::new(0.5, -1.0, 0.0)));
    }

    #[test]
    fn textual_assignment_rejects_bad_input() {
        let mut update = StateOverride::new();
        assert!(matches!(update.set("temperature", "1.0"), Err(ConfigurationError::UnknownField(_))));
        assert!(matches!(update.set("density", "dense"), Err(ConfigurationError::MalformedField { .. })));
        assert!(matches!(update.set("velocity", "0.1,0.2"), Err(ConfigurationError::MalformedField { .. })));
        assert!(update.is_empty());
    }

    #[test]
    fn later_updates_win() {
        let mut update = StateOverride::new().density(2.0).pressure(3.0);
        update.update(&StateOverride::new().density(4.0));
        assert_eq!(update.density, Some(4.0));
        assert_eq!(update.pressure, Some(3.0));
    }

    #[test]
    fn swapping_components_rotates_both_vectors() {
        let s = baseline().swap_components(Direction::I, Direction::J);
        assert_eq!(s.as_array(), [1.0, 5.0, 0.3, 0.0, 0.4, 6.0, 1.0, 2.0]);
    }
}
