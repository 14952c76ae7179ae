//! Map orientation and hexagonal stagger parameters.
//!
//! The loader hands these over as raw strings; `MapBuilder::finalize` parses
//! them eagerly so a bad value fails the load instead of some later accessor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

/// Layout scheme of the map's tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapOrientation {
    Orthogonal,
    Isometric,
    Hexagonal,
    Staggered,
    Shifted,
    #[default]
    Undefined,
}

impl FromStr for MapOrientation {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "orthogonal" => Ok(Self::Orthogonal),
            "isometric" => Ok(Self::Isometric),
            "hexagonal" => Ok(Self::Hexagonal),
            "staggered" => Ok(Self::Staggered),
            "shifted" => Ok(Self::Shifted),
            _ => Err(MapError::Orientation {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MapOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Orthogonal => "orthogonal",
            Self::Isometric => "isometric",
            Self::Hexagonal => "hexagonal",
            Self::Staggered => "staggered",
            Self::Shifted => "shifted",
            Self::Undefined => "undefined",
        };
        f.write_str(name)
    }
}

/// Which axis of a hexagonal/staggered map carries the stagger offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerAxis {
    X,
    Y,
    #[default]
    Undefined,
}

impl FromStr for StaggerAxis {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            _ => Err(MapError::StaggerAxis {
                value: s.to_string(),
            }),
        }
    }
}

/// Which parity of rows/columns along the stagger axis is offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerIndex {
    Odd,
    Even,
    #[default]
    Undefined,
}

impl StaggerIndex {
    /// Whether row/column `n` receives the stagger offset.
    pub fn matches(self, n: u32) -> bool {
        match self {
            Self::Odd => n % 2 == 1,
            Self::Even => n % 2 == 0,
            Self::Undefined => false,
        }
    }
}

impl FromStr for StaggerIndex {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "odd" => Ok(Self::Odd),
            "even" => Ok(Self::Even),
            _ => Err(MapError::StaggerIndex {
                value: s.to_string(),
            }),
        }
    }
}
