use std::{fmt, str::FromStr};

use crate::Error;

/// The unit an angle is reported in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Converts an angle in radians into this unit.
    #[must_use]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            Self::Radians => radians,
            Self::Degrees => radians.to_degrees(),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = Error;

    /// Parses `"rad"` or `"deg"` (and their long forms).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rad" | "radian" | "radians" => Ok(Self::Radians),
            "deg" | "degree" | "degrees" => Ok(Self::Degrees),
            other => Err(Error::UnsupportedUnit(other.to_owned())),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radians => f.write_str("rad"),
            Self::Degrees => f.write_str("deg"),
        }
    }
}
