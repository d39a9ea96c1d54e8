use crate::error::{ShieldError, check_mean_free_path};
use crate::unitf64::UnitF64;

// Trait to sample the distance a particle travels before its next interaction, provided with a
// random number from (0, 1]. As with all sampling methods in this crate, the caller is responsible
// for the range of the random number. This is checked in debug builds, but not in release builds.
pub trait SampleFreePath {
    fn sample_distance(&self, unitf64: UnitF64) -> f64;
}

//=====================================================================
// Exponential free-path law of a homogeneous medium. The distribution
// is parameterised by its mean (the mean free path), not its rate.
//
//     P(X > x) = exp(-x / mean_free_path),  x >= 0
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFreePath {
    mean_free_path: f64,
}

impl ExponentialFreePath {
    pub fn new(mean_free_path: f64) -> Result<Self, ShieldError> {
        let mean_free_path = check_mean_free_path(mean_free_path)?;
        Ok(Self { mean_free_path })
    }

    pub fn mean(&self) -> f64 {
        self.mean_free_path
    }

    // Probability that a particle travels further than `distance` without interacting
    #[inline]
    pub fn survival(&self, distance: f64) -> f64 {
        (-distance / self.mean_free_path).exp()
    }
}

impl SampleFreePath for ExponentialFreePath {
    // Inverse CDF: X = -mean_free_path * ln(U)
    #[inline(always)]
    fn sample_distance(&self, unitf64: UnitF64) -> f64 {
        -self.mean_free_path * unitf64.0.ln()
    }
}
