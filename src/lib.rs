//! Monte Carlo estimate of uncollided particle transmission through a homogeneous 1-D slab,
//! checked against the exponential attenuation law `exp(-thickness / mean_free_path)`.

mod config;
mod error;
mod sampling;
mod transmission;
mod unitf64;
mod utils;

pub use config::{ExecutionMode, SimulationConfig};
pub use error::ShieldError;
pub use sampling::{ExponentialFreePath, SampleFreePath};
pub use transmission::{
    TransmissionEstimate,
    TransmissionEstimator,
    estimate_transmission,
    estimate_transmission_with_rng,
    reference_transmission,
};
pub use unitf64::UnitF64;
