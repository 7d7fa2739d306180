use crate::anneal::AnnealConfig;
use rectpack::io::svg::SvgDrawOptions;
use rectpack::{RPError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the simulated annealing solver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SAConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Wall-clock budget of a single annealing run, in minutes
    pub max_minutes: f64,
    /// Step budget of a single annealing run
    pub max_steps: usize,
    /// Number of moves sampled per temperature probe while calibrating the schedule
    pub n_calibration_steps: usize,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for SAConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            max_minutes: 0.1,
            max_steps: 10_000,
            n_calibration_steps: 200,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

impl SAConfig {
    pub fn anneal_config(&self) -> Result<AnnealConfig> {
        let max_duration = Duration::try_from_secs_f64(self.max_minutes * 60.0).map_err(|e| {
            RPError::InvalidInput(format!("invalid max_minutes ({}): {e}", self.max_minutes))
        })?;
        Ok(AnnealConfig {
            max_steps: self.max_steps,
            max_duration,
            n_calibration_steps: self.n_calibration_steps,
        })
    }
}
