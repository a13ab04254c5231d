use std::fmt;
use std::sync::Arc;

use crate::config::ExecutionConfig;
use crate::crystal::{OrientationBatch, Phase, ReflectorSet};
use crate::detector::DetectorGeometry;
use crate::Result;
use crate::interfaces::{Hemisphere, PlotMode, Projection, Scaling};
use crate::simulations::master_pattern::{MasterPattern, MasterPatternPlan};
use crate::simulations::pattern_geometry::PatternGeometry;
use crate::simulations::plotting::{plot_reflectors, DrawPrimitives};
use crate::simulations::projector::DetectorProjectionPlan;

/// Setup and calculation of kinematical Kikuchi pattern simulations for one set of reflectors.
#[derive(Debug, Clone)]
pub struct KikuchiPatternSimulator {
    reflectors: ReflectorSet,
    config: ExecutionConfig,
}

impl KikuchiPatternSimulator {
    pub fn new(reflectors: ReflectorSet) -> Self {
        Self {
            reflectors,
            config: ExecutionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ExecutionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn reflectors(&self) -> &ReflectorSet {
        &self.reflectors
    }

    pub fn phase(&self) -> &Arc<Phase> {
        self.reflectors.phase()
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Validate a master pattern computation without evaluating it.
    pub fn master_pattern_plan(
        &self,
        half_size: usize,
        hemisphere: Hemisphere,
        scaling: Scaling,
    ) -> Result<MasterPatternPlan> {
        MasterPatternPlan::new(&self.reflectors, half_size, hemisphere, scaling, &self.config)
    }

    /// Kinematical master pattern of size `2 * half_size + 1` in the stereographic projection.
    ///
    /// Requires structure factors and Bragg angles on every reflector.
    pub fn calculate_master_pattern(
        &self,
        half_size: usize,
        hemisphere: Hemisphere,
        scaling: Scaling,
    ) -> Result<MasterPattern> {
        Ok(self
            .master_pattern_plan(half_size, hemisphere, scaling)?
            .materialize())
    }

    pub fn on_detector_plan(
        &self,
        detector: &DetectorGeometry,
        orientations: &OrientationBatch,
    ) -> DetectorProjectionPlan<'_> {
        DetectorProjectionPlan::new(&self.reflectors, detector, orientations)
    }

    /// Project Kikuchi lines and zone axes onto the detector, one pattern per orientation.
    pub fn on_detector(
        &self,
        detector: &DetectorGeometry,
        orientations: &OrientationBatch,
    ) -> PatternGeometry {
        self.on_detector_plan(detector, orientations).materialize()
    }

    /// Draw the reflectors as lines or bands.
    pub fn plot<C: DrawPrimitives + ?Sized>(
        &self,
        projection: Projection,
        mode: PlotMode,
        hemisphere: Hemisphere,
        canvas: &mut C,
    ) -> Result<()> {
        plot_reflectors(&self.reflectors, projection, mode, hemisphere, canvas)
    }
}

impl fmt::Display for KikuchiPatternSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = self.phase();
        write!(
            f,
            "KikuchiPatternSimulator ({},), {} ({})",
            self.reflectors.len(),
            phase.name(),
            phase.point_group()
        )?;
        for reflector in &self.reflectors {
            let hkl = reflector.hkl;
            write!(f, "\n[{:>3} {:>3} {:>3}]", hkl.x, hkl.y, hkl.z)?;
        }
        Ok(())
    }
}
