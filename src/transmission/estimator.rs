use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::config::ExecutionMode;
use crate::error::{ShieldError, check_count, check_thickness};
use crate::sampling::{ExponentialFreePath, SampleFreePath};
use crate::transmission::TransmissionEstimate;
use crate::unitf64::UnitF64;

//=====================================================================
// Monte Carlo estimate of the uncollided transmission through a 1-D
// homogeneous slab. Each trial draws one free path; the particle is
// transmitted when that path is at least the slab thickness.
//
// All parameters are validated on construction, so no sampling is
// ever started for an invalid configuration.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransmissionEstimator {
    count: usize,
    thickness: f64,
    free_path: ExponentialFreePath,
}

impl TransmissionEstimator {
    pub fn new(count: i64, thickness: f64, mean_free_path: f64) -> Result<Self, ShieldError> {
        let count = check_count(count)?;
        let thickness = check_thickness(thickness)?;
        let free_path = ExponentialFreePath::new(mean_free_path)?;
        Ok(Self { count, thickness, free_path })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn mean_free_path(&self) -> f64 {
        self.free_path.mean()
    }

    // Analytic uncollided transmission, exp(-thickness / mean_free_path)
    pub fn reference(&self) -> f64 {
        self.free_path.survival(self.thickness)
    }

    // Draws exactly `trials` uniforms from `rng`
    fn count_transmitted<R: Rng + ?Sized>(&self, rng: &mut R, trials: usize) -> usize {
        (0..trials)
            .filter(|_| self.free_path.sample_distance(UnitF64::sample(rng)) >= self.thickness)
            .count()
    }

    fn fraction(&self, transmitted: usize) -> f64 {
        transmitted as f64 / self.count as f64
    }

    pub fn estimate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.fraction(self.count_transmitted(rng, self.count))
    }

    pub fn estimate(&self) -> f64 {
        self.estimate_with_rng(&mut rand::thread_rng())
    }

    pub fn estimate_seeded(&self, seed: u64) -> f64 {
        self.estimate_with_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn estimate_parallel(&self, workers: usize, seed: Option<u64>) -> f64 {
        self.fraction(self.count_transmitted_parallel(workers, seed))
    }

    // Splits the trials into near-equal partitions, one per worker. Each partition gets its own
    // generator seeded from a master stream, so no two workers share a sequence. The result is
    // reproducible for a fixed (seed, workers) pair.
    fn count_transmitted_parallel(&self, workers: usize, seed: Option<u64>) -> usize {
        let workers = match workers {
            0 => rayon::current_num_threads(),
            n => n,
        }
        .clamp(1, self.count);

        let mut master = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let base = self.count / workers;
        let remainder = self.count % workers;
        let partitions: Vec<(u64, usize)> = (0..workers)
            .map(|worker| (master.next_u64(), base + usize::from(worker < remainder)))
            .collect();

        partitions
            .par_iter()
            .map(|&(partition_seed, trials)| {
                let mut rng = StdRng::seed_from_u64(partition_seed);
                self.count_transmitted(&mut rng, trials)
            })
            .sum()
    }

    // Run the estimator in the requested mode and pair the result with the analytic value.
    // `workers` is only consulted in parallel mode, where 0 means one per rayon thread.
    pub fn run(&self, mode: ExecutionMode, workers: usize, seed: Option<u64>) -> TransmissionEstimate {
        let start = Instant::now();
        let transmitted = match (mode, seed) {
            (ExecutionMode::Serial, Some(seed)) => self.count_transmitted(&mut StdRng::seed_from_u64(seed), self.count),
            (ExecutionMode::Serial, None) => self.count_transmitted(&mut rand::thread_rng(), self.count),
            (ExecutionMode::Parallel, seed) => self.count_transmitted_parallel(workers, seed),
        };
        debug!(
            %mode,
            count = self.count,
            transmitted,
            elapsed_us = start.elapsed().as_micros() as u64,
            "sampling pass complete"
        );

        TransmissionEstimate::new(self.count, transmitted, self.reference())
    }
}

//=====================================================================
// Free-function forms of the estimator and the analytic reference.
//=====================================================================

// Fraction of `count` particles crossing a slab of `thickness` without interacting, using the
// thread-local generator.
pub fn estimate_transmission(count: i64, thickness: f64, mean_free_path: f64) -> Result<f64, ShieldError> {
    Ok(TransmissionEstimator::new(count, thickness, mean_free_path)?.estimate())
}

pub fn estimate_transmission_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    count: i64,
    thickness: f64,
    mean_free_path: f64,
) -> Result<f64, ShieldError> {
    Ok(TransmissionEstimator::new(count, thickness, mean_free_path)?.estimate_with_rng(rng))
}

pub fn reference_transmission(thickness: f64, mean_free_path: f64) -> Result<f64, ShieldError> {
    let thickness = check_thickness(thickness)?;
    Ok(ExponentialFreePath::new(mean_free_path)?.survival(thickness))
}
