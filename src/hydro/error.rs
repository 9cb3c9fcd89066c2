use std::error;
use std::fmt;




#[derive(Debug, Clone, PartialEq)]

/**
 * Error to represent a problem setup which cannot be built: either the grid
 * has a rank the chosen geometry does not handle, or the problem was
 * configured with regions or fields that do not exist.
 */
pub enum Error {
    UnsupportedDimensionality {
        geometry: &'static str,
        rank: usize,
    },
    Configuration(ConfigurationError),
}




#[derive(Debug, Clone, PartialEq)]

/**
 * Reasons a problem definition is rejected at construction time.
 */
pub enum ConfigurationError {
    UnknownRegion {
        region: String,
        expected: &'static [&'static str],
    },
    UnknownField(String),
    MalformedField {
        field: String,
        reason: String,
    },
    RegionCount {
        expected: usize,
        found: usize,
    },
    OrientationNotApplicable(&'static str),
    NotPlanar(&'static str),
    UnknownPreset {
        name: String,
        expected: Vec<&'static str>,
    },
}




// ============================================================================
impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            UnsupportedDimensionality { geometry, rank } => {
                write!(fmt, "{} setup is not available for {}-dimensional grids", geometry, rank)
            }
            Configuration(e) => write!(fmt, "invalid problem configuration: {}", e),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use ConfigurationError::*;

        match self {
            UnknownRegion { region, expected } => {
                write!(fmt, "unknown region '{}' (expected one of {})", region, expected.join(", "))
            }
            UnknownField(field) => {
                write!(fmt, "unknown field '{}' (expected density, pressure, velocity, or field)", field)
            }
            MalformedField { field, reason } => write!(fmt, "malformed value for '{}': {}", field, reason),
            RegionCount { expected, found } => {
                write!(fmt, "expected {} baseline states, got {}", expected, found)
            }
            OrientationNotApplicable(geometry) => {
                write!(fmt, "orientation may only be changed for planar setups, not {}", geometry)
            }
            NotPlanar(geometry) => write!(fmt, "boundary states are only defined for planar setups, not {}", geometry),
            UnknownPreset { name, expected } => {
                write!(fmt, "unknown preset '{}' (expected one of {})", name, expected.join(", "))
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Configuration(e) => Some(e),
            _ => None,
        }
    }
}

impl error::Error for ConfigurationError {}

impl From<ConfigurationError> for Error {
    fn from(e: ConfigurationError) -> Self {
        Error::Configuration(e)
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{ConfigurationError, Error};

    #[test]
    fn configuration_errors_convert_and_chain() {
        let e: Error = ConfigurationError::UnknownField("temperature".into()).into();
        assert!(matches!(e, Error::Configuration(ConfigurationError::UnknownField(_))));
        assert!(std::error::Error::source(&e).is_some());
        assert!(e.to_string().contains("temperature"));
    }

    #[test]
    fn unsupported_dimensionality_names_the_geometry() {
        let e = Error::UnsupportedDimensionality { geometry: "radial", rank: 1 };
        assert_eq!(e.to_string(), "radial setup is not available for 1-dimensional grids");
    }
}
