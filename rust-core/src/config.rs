// Constants

use serde::{Deserialize, Serialize};

// Tolerances
pub const BASE_VECTOR_TOLERANCE: f64 = 1e-10; // For construction of base matrices
pub const EXACT_ZONE_TOLERANCE: f64 = 1e-7; // |dot| at or below this lies on the zero-width Kikuchi line

// Frame conventions
pub const SAMPLE_DETECTOR_OFFSET_DEG: f64 = 90.0; // Sample and detector normals are 90° apart at zero tilt

// Plotting
pub const CIRCLE_STEPS: usize = 101; // Points per drawn great/small circle

/// Execution settings for materializing simulation plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExecutionConfig {
    /// Rows of master pattern pixels evaluated per chunk. `None` uses the grid half size.
    pub chunk_rows: Option<usize>,
}

impl ExecutionConfig {
    pub fn with_chunk_rows(chunk_rows: usize) -> Self {
        Self {
            chunk_rows: Some(chunk_rows.max(1)),
        }
    }

    /// Chunk height for a master pattern of the given half size.
    pub fn rows_per_chunk(&self, half_size: usize) -> usize {
        self.chunk_rows.unwrap_or(half_size).max(1)
    }
}
