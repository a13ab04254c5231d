//! Error types shared by every simulation entry point.
//!
//! Precondition and invalid-option errors are raised while a plan is built,
//! before any expensive evaluation starts.

use std::fmt;

use thiserror::Error;

/// Derived reflector attribute that must be computed upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectorAttribute {
    StructureFactor,
    BraggAngle,
}

impl ReflectorAttribute {
    /// Hint telling the caller how to obtain the attribute.
    pub fn hint(&self) -> &'static str {
        match self {
            ReflectorAttribute::StructureFactor => {
                "calculate structure factors upstream and attach them with `ReflectorSet::with_structure_factors`"
            }
            ReflectorAttribute::BraggAngle => {
                "calculate Bragg angles upstream and attach them with `ReflectorSet::with_bragg_angles`"
            }
        }
    }
}

impl fmt::Display for ReflectorAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReflectorAttribute::StructureFactor => write!(f, "structure factors"),
            ReflectorAttribute::BraggAngle => write!(f, "Bragg angles"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Reflectors have no {attribute}; {}", .attribute.hint())]
    MissingAttribute { attribute: ReflectorAttribute },

    #[error("Unknown `{parameter}` '{value}', valid options are {}", format_options(.valid))]
    InvalidOption {
        parameter: &'static str,
        value: String,
        valid: &'static [&'static str],
    },

    #[error("Grid half size must be at least 1, got {0}")]
    InvalidGridSize(usize),

    #[error("Invalid navigation shape {shape:?} for {count} orientations (at most two navigation dimensions)")]
    InvalidNavigationShape { shape: Vec<usize>, count: usize },

    #[error("Expected {expected} {what}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid lattice basis: {0}")]
    InvalidBasis(String),
}

fn format_options(valid: &[&str]) -> String {
    let quoted: Vec<String> = valid.iter().map(|v| format!("'{v}'")).collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}
