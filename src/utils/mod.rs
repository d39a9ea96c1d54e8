#[cfg(test)]
mod mock_rng;
#[cfg(test)]
mod testing;

#[cfg(test)]
pub use mock_rng::MockRng;
#[cfg(test)]
pub use testing::{DOUBLE_SLAB_RUN, UNIT_SLAB_RUN};
