mod free_path;

pub use free_path::{ExponentialFreePath, SampleFreePath};
