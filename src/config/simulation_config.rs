use tracing::info;

use crate::config::ExecutionMode;
use crate::error::ShieldError;
use crate::transmission::{TransmissionEstimate, TransmissionEstimator};

//=====================================================================
// Parameters of a single transmission run. The defaults describe a
// one mean-free-path slab sampled with a million particles.
//
// `count` is signed so that a non-positive value reaches validation
// and is reported as an invalid argument instead of a parse error.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub count: i64,
    pub thickness: f64,
    pub mean_free_path: f64,
    pub seed: Option<u64>,
    pub mode: ExecutionMode,
    pub workers: usize,
}

impl SimulationConfig {
    pub const DEFAULT_COUNT: i64 = 1_000_000;
    pub const DEFAULT_THICKNESS: f64 = 1.0;
    pub const DEFAULT_MEAN_FREE_PATH: f64 = 1.0;

    pub fn validate(&self) -> Result<TransmissionEstimator, ShieldError> {
        TransmissionEstimator::new(self.count, self.thickness, self.mean_free_path)
    }

    pub fn run(&self) -> Result<TransmissionEstimate, ShieldError> {
        let estimator = self.validate()?;
        let estimate = estimator.run(self.mode, self.workers, self.seed);
        info!(
            count = estimate.count,
            thickness = self.thickness,
            mean_free_path = self.mean_free_path,
            fraction = estimate.fraction,
            expected = estimate.expected,
            standard_error = estimate.standard_error(),
            z_score = estimate.z_score(),
            "transmission run finished"
        );
        Ok(estimate)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            thickness: Self::DEFAULT_THICKNESS,
            mean_free_path: Self::DEFAULT_MEAN_FREE_PATH,
            seed: None,
            mode: ExecutionMode::Serial,
            workers: 0,
        }
    }
}
