use rand::Rng;
use rand::distributions::Open01;

// Sampling functions in this crate take their randomness as a UnitF64 rather than reaching for an
// RNG themselves. This keeps the transforms pure and lets tests feed exact values.
//
// The free-path transform takes ln(U), so the value must lie in (0.0, 1.0]. This is checked in
// debug builds only; in release builds it is up to the caller to respect the range.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnitF64(pub f64);

impl UnitF64 {
    #[inline(always)]
    pub fn new_unchecked(val: f64) -> Self {
        debug_assert!(
            val > 0.0 && val <= 1.0,
            "UnitF64 must be in (0.0, 1.0], got {}",
            val
        );
        UnitF64(val)
    }

    // Draw a single variate from the open interval (0, 1). Consumes exactly one u64 from `rng`.
    #[inline(always)]
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        UnitF64(rng.sample(Open01))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::utils::MockRng;

    #[test]
    fn test_sample_is_open_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let u = UnitF64::sample(&mut rng);
            assert!(u.0 > 0.0 && u.0 < 1.0);
        }
    }

    #[test]
    fn test_sample_consumes_one_draw() {
        // Two values available, two samples taken; a third would panic
        let mut rng = MockRng::new(vec![0.5, 0.25]);
        let first = UnitF64::sample(&mut rng);
        let second = UnitF64::sample(&mut rng);
        assert!((first.0 - 0.5).abs() < 1e-15);
        assert!((second.0 - 0.25).abs() < 1e-15);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_new_unchecked_rejects_zero() {
        UnitF64::new_unchecked(0.0);
    }
}
