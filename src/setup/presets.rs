//! Master list of the problem presets.
//!
//! The relativistic shock tubes are problems 1 and 2 of Marti & Muller's
//! review (Living Reviews in Relativity, 2003), with the left pressure of
//! problem 1 raised away from zero, and the transverse velocity problem of
//! Zhang & MacFadyen (2005, section 6.1). The RMHD tubes and waves are the
//! standard relativistic MHD one-dimensional tests.

use std::fmt;
use std::str::FromStr;
use crate::hydro::error::ConfigurationError;
use crate::hydro::state::StateVector;
use super::{Geometry, ProblemBuilder};




#[derive(Clone, Copy, Debug, PartialEq)]

/**
 * A named problem, which fixes the geometry and the baseline state of every
 * region.
 */
pub enum Preset {
    SrShockTube1,
    SrShockTube2,
    SrShockTube3,
    RmhdShockTube1,
    RmhdShockTube2,
    RmhdShockTube3,
    RmhdShockTube4,
    RmhdContactWave,
    RmhdRotationalWave,
    RmhdCylindricalA { pre: f64 },
    SrQuadrantA,
    SrQuadrantB,
}




fn presets() -> Vec<(&'static str, Preset)> {
    vec![
        ("sr-shock-tube-1", Preset::SrShockTube1),
        ("sr-shock-tube-2", Preset::SrShockTube2),
        ("sr-shock-tube-3", Preset::SrShockTube3),
        ("rmhd-shock-tube-1", Preset::RmhdShockTube1),
        ("rmhd-shock-tube-2", Preset::RmhdShockTube2),
        ("rmhd-shock-tube-3", Preset::RmhdShockTube3),
        ("rmhd-shock-tube-4", Preset::RmhdShockTube4),
        ("rmhd-contact-wave", Preset::RmhdContactWave),
        ("rmhd-rotational-wave", Preset::RmhdRotationalWave),
        ("rmhd-cylindrical-a", Preset::RmhdCylindricalA { pre: 1.0 }),
        ("sr-quadrant-a", Preset::SrQuadrantA),
        ("sr-quadrant-b", Preset::SrQuadrantB),
    ]
}

/// The names accepted by `Preset::from_str`.
pub fn preset_names() -> Vec<&'static str> {
    presets().into_iter().map(|(name, _)| name).collect()
}




// ============================================================================
impl Preset {

    pub fn name(&self) -> &'static str {
        presets()
            .into_iter()
            .find(|(_, p)| std::mem::discriminant(p) == std::mem::discriminant(self))
            .map(|(name, _)| name)
            .unwrap_or("custom")
    }

    pub fn geometry(&self) -> Geometry {
        use Preset::*;

        match self {
            RmhdCylindricalA { .. } => Geometry::Radial,
            SrQuadrantA | SrQuadrantB => Geometry::Quadrant,
            _ => Geometry::Planar,
        }
    }

    /**
     * The baseline state of each region, in the order of
     * `self.geometry().region_names()`.
     */
    pub fn baseline(&self) -> Vec<StateVector> {
        use Preset::*;
        let s = StateVector::new;
        let zero = [0.0; 3];

        match *self {
            SrShockTube1 => vec![
                s(10.0, 13.33, zero, zero),
                s(1.0, 0.01, zero, zero),
            ],
            SrShockTube2 => vec![
                s(1.0, 1000.0, zero, zero),
                s(1.0, 0.01, zero, zero),
            ],
            SrShockTube3 => vec![
                s(1.0, 1000.0, [0.0, 0.9, 0.0], zero),
                s(1.0, 0.01, [0.0, 0.9, 0.0], zero),
            ],
            RmhdShockTube1 => vec![
                s(1.000, 1.0, zero, [0.5, 1.0, 0.0]),
                s(0.125, 0.1, zero, [0.5, -1.0, 0.0]),
            ],
            RmhdShockTube2 => vec![
                s(1.08, 0.95, [0.40, 0.3, 0.2], [2.0, 0.3, 0.3]),
                s(0.95, 1.00, [-0.45, -0.2, 0.2], [2.0, -0.7, 0.5]),
            ],
            RmhdShockTube3 => vec![
                s(1.0, 0.1, [0.999, 0.0, 0.0], [10.0, 7.0, 7.0]),
                s(1.0, 0.1, [-0.999, 0.0, 0.0], [10.0, -7.0, -7.0]),
            ],
            RmhdShockTube4 => vec![
                s(1.0, 5.0, [0.0, 0.3, 0.4], [1.0, 6.0, 2.0]),
                s(0.9, 5.3, zero, [1.0, 5.0, 2.0]),
            ],
            RmhdContactWave => vec![
                s(1.0, 1.0, [0.0, 0.7, 0.2], [5.0, 1.0, 0.5]),
                s(0.1, 1.0, [0.0, 0.7, 0.2], [5.0, 1.0, 0.5]),
            ],
            RmhdRotationalWave => vec![
                s(1.0, 1.0, [0.377347, -0.482389, 0.424190], [2.4, 1.0, -1.600000]),
                s(1.0, 1.0, [0.400000, -0.300000, 0.500000], [2.4, -0.1, -2.178213]),
            ],
            RmhdCylindricalA { pre } => vec![
                s(1.0, pre, zero, [4.0, 0.0, 0.0]),
                s(1.0, 0.01, zero, [4.0, 0.0, 0.0]),
            ],
            SrQuadrantA => quadrant_baseline(0.99),
            SrQuadrantB => quadrant_baseline(0.80),
        }
    }

    /**
     * Start building a problem from this preset.
     */
    pub fn builder(&self) -> ProblemBuilder {
        ProblemBuilder::custom(self.geometry(), self.baseline()).name(self.name())
    }
}

/// NE and SW at rest, NW moving along x and SE moving along y.
fn quadrant_baseline(speed: f64) -> Vec<StateVector> {
    let s = StateVector::new;
    let zero = [0.0; 3];
    vec![
        s(1.0, 1.0, zero, zero),
        s(1.0, 1.0, [speed, 0.0, 0.0], zero),
        s(1.0, 1.0, [0.0, speed, 0.0], zero),
        s(1.0, 1.0, zero, zero),
    ]
}




/**
 * Parse a preset from its name, optionally followed by `:key=value`
 * parameters, e.g. `rmhd-cylindrical-a:pre=10.0`.
 */
impl FromStr for Preset {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ':');
        let name = parts.next().unwrap_or_default();
        let parameters = parts.next().unwrap_or_default();

        let preset = presets()
            .into_iter()
            .find(|&(n, _)| n == name)
            .map(|(_, p)| p)
            .ok_or_else(|| ConfigurationError::UnknownPreset {
                name: name.to_string(),
                expected: preset_names(),
            })?;

        parameters
            .split(':')
            .filter(|p| !p.is_empty())
            .try_fold(preset, apply_parameter)
    }
}

fn apply_parameter(preset: Preset, parameter: &str) -> Result<Preset, ConfigurationError> {
    let mut kv = parameter.splitn(2, '=');
    let key = kv.next().unwrap_or_default();
    let value = kv.next().ok_or_else(|| ConfigurationError::MalformedField {
        field: key.to_string(),
        reason: "expected key=value".to_string(),
    })?;

    match (preset, key) {
        (Preset::RmhdCylindricalA { .. }, "pre") => {
            let pre = value.parse().map_err(|_| ConfigurationError::MalformedField {
                field: key.to_string(),
                reason: format!("'{}' is not a number", value),
            })?;
            Ok(Preset::RmhdCylindricalA { pre })
        }
        _ => Err(ConfigurationError::UnknownField(format!("{}:{}", preset.name(), key))),
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::RmhdCylindricalA { pre } => write!(fmt, "{}:pre={}", self.name(), pre),
            _ => write!(fmt, "{}", self.name()),
        }
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn every_preset_fills_its_regions() {
        for (name, preset) in presets() {
            assert_eq!(preset.name(), name);
            assert_eq!(preset.baseline().len(), preset.geometry().region_names().len());
        }
    }

    #[test]
    fn presets_parse_by_name() {
        assert_eq!("sr-quadrant-b".parse::<Preset>(), Ok(Preset::SrQuadrantB));
        assert_eq!("rmhd-cylindrical-a".parse::<Preset>(), Ok(Preset::RmhdCylindricalA { pre: 1.0 }));
        assert_eq!("rmhd-cylindrical-a:pre=10".parse::<Preset>(), Ok(Preset::RmhdCylindricalA { pre: 10.0 }));
    }

    #[test]
    fn unknown_presets_list_the_choices() {
        match "sod".parse::<Preset>() {
            Err(ConfigurationError::UnknownPreset { name, expected }) => {
                assert_eq!(name, "sod");
                assert!(expected.contains(&"sr-shock-tube-1"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn bad_parameters_are_rejected() {
        assert!(matches!("sr-shock-tube-1:pre=2".parse::<Preset>(), Err(ConfigurationError::UnknownField(_))));
        assert!(matches!("rmhd-cylindrical-a:pre".parse::<Preset>(), Err(ConfigurationError::MalformedField { .. })));
        assert!(matches!("rmhd-cylindrical-a:pre=high".parse::<Preset>(), Err(ConfigurationError::MalformedField { .. })));
    }

    #[test]
    fn cylinder_pressure_is_a_parameter() {
        let inside = Preset::RmhdCylindricalA { pre: 100.0 }.baseline()[0];
        assert_eq!(inside.as_array(), [1.0, 100.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0]);
        assert_eq!(Preset::RmhdCylindricalA { pre: 100.0 }.to_string(), "rmhd-cylindrical-a:pre=100");
    }
}
