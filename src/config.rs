use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::hydro::error::{ConfigurationError, Error};
use crate::hydro::state::StateOverride;
use crate::setup::problem::DEFAULT_ADIABATIC_GAMMA;
use crate::setup::{Orientation, Preset, Problem};




/// Declarative description of a problem, as it may be read from a
/// configuration document. Region overrides are held to the same four-field
/// schema as `StateOverride`: unknown keys are rejected when deserializing.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemConfig {
    pub preset: String,
    #[serde(default = "default_adiabatic_gamma")]
    pub adiabatic_gamma: f64,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub regions: BTreeMap<String, StateOverride>,
}

fn default_adiabatic_gamma() -> f64 {
    DEFAULT_ADIABATIC_GAMMA
}

impl ProblemConfig {
    pub fn new(preset: &str) -> Self {
        Self {
            preset: preset.to_string(),
            adiabatic_gamma: DEFAULT_ADIABATIC_GAMMA,
            orientation: Orientation::X,
            regions: BTreeMap::new(),
        }
    }

    /// Apply a textual assignment of the form `region.field=value`, e.g.
    /// `left.velocity=0.0,0.9,0.0`. The region name is checked when the
    /// problem is built.
    ///
    pub fn assign(&mut self, assignment: &str) -> Result<(), Error> {
        let malformed = || ConfigurationError::MalformedField {
            field: assignment.to_string(),
            reason: "expected region.field=value".to_string(),
        };
        let mut kv = assignment.splitn(2, '=');
        let key = kv.next().unwrap_or_default();
        let value = kv.next().ok_or_else(malformed)?;
        let mut path = key.splitn(2, '.');
        let region = path.next().unwrap_or_default();
        let field = path.next().ok_or_else(malformed)?;

        self.regions
            .entry(region.to_string())
            .or_default()
            .set(field, value)?;
        Ok(())
    }

    pub fn build(&self) -> Result<Problem, Error> {
        let preset: Preset = self.preset.parse()?;
        Problem::new(preset, self.regions.iter().map(|(r, o)| (r, *o)), self.adiabatic_gamma, self.orientation)
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use std::collections::BTreeMap;
    use serde::Serialize;
    use crate::hydro::error::{ConfigurationError, Error};
    use crate::setup::{Geometry, Orientation};
    use super::ProblemConfig;

    fn decode<T: Serialize>(document: &T) -> Result<ProblemConfig, String> {
        let mut buffer = Vec::new();
        ciborium::ser::into_writer(document, &mut buffer).unwrap();
        ciborium::de::from_reader(buffer.as_slice()).map_err(|e| e.to_string())
    }

    #[derive(Serialize)]
    struct Document {
        preset: &'static str,
        orientation: &'static str,
        regions: BTreeMap<&'static str, BTreeMap<&'static str, Vec<f64>>>,
    }

    #[test]
    fn documents_decode_into_problems() {
        let mut left = BTreeMap::new();
        left.insert("velocity", vec![0.1, 0.2, 0.0]);
        let mut regions = BTreeMap::new();
        regions.insert("left", left);

        let config = decode(&Document { preset: "rmhd-shock-tube-1", orientation: "y", regions }).unwrap();
        assert_eq!(config.orientation, Orientation::Y);
        assert_eq!(config.adiabatic_gamma, 1.4);

        let problem = config.build().unwrap();
        assert_eq!(problem.geometry(), Geometry::Planar);
        assert_eq!(problem.get_states().unwrap().0[2..5], [0.1, 0.2, 0.0]);
    }

    #[test]
    fn documents_with_unknown_fields_are_rejected() {
        let mut left = BTreeMap::new();
        left.insert("temperature", vec![1.0]);
        let mut regions = BTreeMap::new();
        regions.insert("left", left);

        assert!(decode(&Document { preset: "sr-shock-tube-1", orientation: "x", regions }).is_err());
    }

    #[test]
    fn vector_fields_need_three_components() {
        let mut left = BTreeMap::new();
        left.insert("field", vec![1.0, 0.0]);
        let mut regions = BTreeMap::new();
        regions.insert("left", left);

        assert!(decode(&Document { preset: "sr-shock-tube-1", orientation: "x", regions }).is_err());
    }

    #[test]
    fn assignments_accumulate_per_region() {
        let mut config = ProblemConfig::new("sr-quadrant-a");
        config.assign("NE.density=2.5").unwrap();
        config.assign("NE.velocity=0.1,0,0").unwrap();
        let problem = config.build().unwrap();
        assert_eq!(problem.state("NE").unwrap().as_array(), [2.5, 1.0, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn bad_assignments_are_configuration_errors() {
        let mut config = ProblemConfig::new("sr-quadrant-a");
        assert!(matches!(config.assign("NE.density"), Err(Error::Configuration(ConfigurationError::MalformedField { .. }))));
        assert!(matches!(config.assign("density=1"), Err(Error::Configuration(ConfigurationError::MalformedField { .. }))));
        assert!(matches!(config.assign("NE.entropy=1"), Err(Error::Configuration(ConfigurationError::UnknownField(_)))));

        config.assign("center.density=1").unwrap();
        assert!(matches!(config.build(), Err(Error::Configuration(ConfigurationError::UnknownRegion { .. }))));
    }

    #[test]
    fn unknown_presets_fail_to_build() {
        assert!(matches!(
            ProblemConfig::new("kelvin-helmholtz").build(),
            Err(Error::Configuration(ConfigurationError::UnknownPreset { .. }))));
    }
}
