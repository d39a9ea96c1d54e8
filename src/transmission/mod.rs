mod estimate;
mod estimator;

pub use estimate::TransmissionEstimate;
pub use estimator::{
    TransmissionEstimator,
    estimate_transmission,
    estimate_transmission_with_rng,
    reference_transmission,
};
