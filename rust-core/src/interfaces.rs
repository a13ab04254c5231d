// Definitions that are used throughout all modules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

// Enumeration to track the space type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Space {
    Real,
    Reciprocal,
}

pub mod space {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Direct;
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Reciprocal;
}

/// Implements `FromStr`/`Display` for a closed option enum from a table of names.
macro_rules! closed_option {
    ($ty:ident, $parameter:literal, [$($name:literal => $variant:ident),+ $(,)?]) => {
        impl $ty {
            pub const VALID: &'static [&'static str] = &[$($name),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = SimulationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(SimulationError::InvalidOption {
                        parameter: $parameter,
                        value: s.to_string(),
                        valid: $ty::VALID,
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Which stereographic hemisphere(s) to compute or draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Hemisphere {
    #[default]
    North,
    South,
    Both,
}

closed_option!(Hemisphere, "hemisphere", ["north" => North, "south" => South, "both" => Both]);

impl Hemisphere {
    /// Projection poles in output order. North uses pole -1, south pole +1.
    pub fn poles(&self) -> &'static [f64] {
        match self {
            Hemisphere::North => &[-1.0],
            Hemisphere::South => &[1.0],
            Hemisphere::Both => &[-1.0, 1.0],
        }
    }
}

/// Intensity scaling of kinematical band intensities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Scaling {
    /// |F|
    #[default]
    Linear,
    /// |F|²
    Square,
    /// Every band has intensity 1
    None,
}

closed_option!(Scaling, "scaling", ["linear" => Linear, "square" => Square, "none" => None]);

/// Projection used when drawing reflectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Projection {
    #[default]
    Stereographic,
    Spherical,
}

closed_option!(Projection, "projection", ["stereographic" => Stereographic, "spherical" => Spherical]);

/// Whether reflectors are drawn as zero-width lines or Bragg-angle bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlotMode {
    #[default]
    Lines,
    Bands,
}

closed_option!(PlotMode, "mode", ["lines" => Lines, "bands" => Bands]);

/// Physics used to generate a master pattern. Only kinematical is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SimulationMode {
    #[default]
    Kinematical,
}

closed_option!(SimulationMode, "mode", ["kinematical" => Kinematical]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_case_insensitive() {
        assert_eq!("North".parse::<Hemisphere>().unwrap(), Hemisphere::North);
        assert_eq!("both".parse::<Hemisphere>().unwrap(), Hemisphere::Both);
        assert_eq!("None".parse::<Scaling>().unwrap(), Scaling::None);
        assert_eq!("square".parse::<Scaling>().unwrap(), Scaling::Square);
        assert_eq!("spherical".parse::<Projection>().unwrap(), Projection::Spherical);
        assert_eq!("bands".parse::<PlotMode>().unwrap(), PlotMode::Bands);
    }

    #[test]
    fn test_unknown_option_lists_valid_set() {
        let err = "cubic".parse::<Scaling>().unwrap_err();
        match err {
            SimulationError::InvalidOption {
                parameter, valid, ..
            } => {
                assert_eq!(parameter, "scaling");
                assert_eq!(valid, &["linear", "square", "none"]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_hemisphere_pole_order() {
        assert_eq!(Hemisphere::Both.poles(), &[-1.0, 1.0]);
        assert_eq!(Hemisphere::North.poles()[0], Hemisphere::Both.poles()[0]);
    }
}
