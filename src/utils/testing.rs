//=====================================================================
// Shared fixtures to aid in accelerating testing
//=====================================================================

use lazy_static::lazy_static;

use crate::config::ExecutionMode;
use crate::transmission::{TransmissionEstimate, TransmissionEstimator};

// Million-particle runs are the slowest part of the test suite. These
// are computed once on first use and shared by every test that needs
// a converged estimate.
lazy_static! {
    pub static ref UNIT_SLAB_RUN: TransmissionEstimate = seeded_run(1.0, 1.0, 20240601);
    pub static ref DOUBLE_SLAB_RUN: TransmissionEstimate = seeded_run(2.0, 1.0, 20240602);
}

fn seeded_run(thickness: f64, mean_free_path: f64, seed: u64) -> TransmissionEstimate {
    TransmissionEstimator::new(1_000_000, thickness, mean_free_path)
        .expect("fixture parameters are valid")
        .run(ExecutionMode::Serial, 0, Some(seed))
}
