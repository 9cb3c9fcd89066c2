use log::debug;
use crate::grid::Grid;
use crate::hydro::error::{ConfigurationError, Error};
use crate::hydro::state::{StateOverride, StateVector, NUM_FIELDS};
use crate::index_space::IndexSpace;
use super::{Coordinates, Geometry, Orientation, Preset};

pub const DEFAULT_ADIABATIC_GAMMA: f64 = 1.4;




/**
 * A fully configured test problem: a geometry, the state assigned to each of
 * its regions, and the adiabatic index downstream solvers should use. A
 * problem is immutable once built, and may be used to generate any number of
 * grids.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    name: String,
    geometry: Geometry,
    orientation: Orientation,
    adiabatic_gamma: f64,
    states: Vec<StateVector>,
}




/**
 * Collects the per-region overrides and scalar options of a problem, and
 * validates them all at once in `build`.
 */
#[derive(Clone, Debug)]
pub struct ProblemBuilder {
    name: String,
    geometry: Geometry,
    baseline: Vec<StateVector>,
    overrides: Vec<(String, StateOverride)>,
    adiabatic_gamma: f64,
    orientation: Orientation,
}




// ============================================================================
impl ProblemBuilder {

    /**
     * Start a problem from an arbitrary geometry and one baseline state per
     * region, given in the geometry's region order.
     */
    pub fn custom(geometry: Geometry, baseline: Vec<StateVector>) -> Self {
        Self {
            name: "custom".to_string(),
            geometry,
            baseline,
            overrides: Vec::new(),
            adiabatic_gamma: DEFAULT_ADIABATIC_GAMMA,
            orientation: Orientation::X,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /**
     * Override fields of one region's baseline. Repeated calls for the same
     * region are layered in order, so later values win.
     */
    pub fn region(mut self, region: &str, update: StateOverride) -> Self {
        self.overrides.push((region.to_string(), update));
        self
    }

    pub fn regions<I, S>(self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, StateOverride)>,
        S: AsRef<str>,
    {
        overrides
            .into_iter()
            .fold(self, |builder, (region, update)| builder.region(region.as_ref(), update))
    }

    pub fn adiabatic_gamma(mut self, adiabatic_gamma: f64) -> Self {
        self.adiabatic_gamma = adiabatic_gamma;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn build(self) -> Result<Problem, Error> {
        let Self {
            name,
            geometry,
            baseline,
            overrides,
            adiabatic_gamma,
            orientation,
        } = self;

        let num_regions = geometry.region_names().len();

        if baseline.len() != num_regions {
            return Err(ConfigurationError::RegionCount {
                expected: num_regions,
                found: baseline.len(),
            }.into());
        }
        if orientation != Orientation::X && geometry != Geometry::Planar {
            return Err(ConfigurationError::OrientationNotApplicable(geometry.name()).into());
        }

        let mut updates = vec![StateOverride::new(); num_regions];

        for (region, update) in &overrides {
            updates[geometry.region_index(region)?].update(update);
        }

        let states = baseline
            .iter()
            .zip(&updates)
            .map(|(state, update)| update.apply_to(state))
            .collect();

        debug!("built {} problem '{}' with {} region override(s)", geometry, name, overrides.len());

        Ok(Problem {
            name,
            geometry,
            orientation,
            adiabatic_gamma,
            states,
        })
    }
}




// ============================================================================
impl Problem {

    pub fn builder(preset: Preset) -> ProblemBuilder {
        preset.builder()
    }

    /**
     * Build a problem from a preset in one call.
     */
    pub fn new<I, S>(preset: Preset, overrides: I, adiabatic_gamma: f64, orientation: Orientation) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, StateOverride)>,
        S: AsRef<str>,
    {
        preset
            .builder()
            .regions(overrides)
            .adiabatic_gamma(adiabatic_gamma)
            .orientation(orientation)
            .build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn adiabatic_gamma(&self) -> f64 {
        self.adiabatic_gamma
    }

    pub fn region_names(&self) -> &'static [&'static str] {
        self.geometry.region_names()
    }

    /**
     * The merged states, in region order, before any orientation is applied.
     */
    pub fn states(&self) -> &[StateVector] {
        &self.states
    }

    pub fn state(&self, region: &str) -> Option<&StateVector> {
        self.geometry.region_index(region).ok().map(|n| &self.states[n])
    }

    /**
     * Return the left and right states of a planar problem, flattened. These
     * are the jump conditions along the tube, whatever the orientation.
     */
    pub fn get_states(&self) -> Result<([f64; NUM_FIELDS], [f64; NUM_FIELDS]), Error> {
        match self.geometry {
            Geometry::Planar => Ok((self.states[0].as_array(), self.states[1].as_array())),
            _ => Err(ConfigurationError::NotPlanar(self.geometry.name()).into()),
        }
    }

    /**
     * Return the region index of every cell of a grid with the given spatial
     * shape, in row-major order.
     */
    pub fn classify(&self, shape: &[usize]) -> Result<Vec<usize>, Error> {
        let classifier = self.geometry.classifier(self.orientation);
        classifier.check_rank(shape.len())?;

        let coordinates = Coordinates::new(shape);
        Ok(IndexSpace::new(shape)
            .iter()
            .map(|index| classifier.region_of(&coordinates, index))
            .collect())
    }

    /**
     * Generate the initial data on a grid of the given spatial shape, with
     * `num_fields` values per cell. Each cell receives the leading
     * `num_fields` entries of its region's flattened state; any entries past
     * the eight state fields are zero.
     */
    pub fn initial_model(&self, shape: &[usize], num_fields: usize) -> Result<Grid, Error> {
        let classifier = self.geometry.classifier(self.orientation);
        classifier.check_rank(shape.len())?;

        let states = classifier.orient(&self.states, shape.len());
        let coordinates = Coordinates::new(shape);
        let grid = Grid::from_slice_function(shape, num_fields, |index, slice| {
            states[classifier.region_of(&coordinates, index)].write_to_slice(slice)
        });

        debug!("{}: generated initial model of shape {:?}", self.name, grid.shape());
        Ok(grid)
    }
}
