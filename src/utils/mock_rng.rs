use rand::RngCore;

// Replays a fixed list of uniform variates. Each value is encoded so that sampling it through
// `rand::distributions::Open01` gives back the value itself, offset by at most 2^-53.
//
// Panics once the list is exhausted, which lets tests assert how many draws a routine takes.
pub struct MockRng {
    values: Vec<f64>,
    index: usize,
}

impl MockRng {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    pub fn draws(&self) -> usize {
        self.index
    }
}

// Open01 keeps the top 52 bits of a u64 as the fraction
const FRACTION_BITS: u32 = 52;
const MAX_FRACTION: u64 = (1 << FRACTION_BITS) - 1;

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        if self.index >= self.values.len() {
            panic!("MockRng: Ran out of values to return");
        }
        let value = self.values[self.index];
        self.index += 1;
        let fraction = ((value * (1u64 << FRACTION_BITS) as f64) as u64).min(MAX_FRACTION);
        fraction << (64 - FRACTION_BITS)
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        unimplemented!("MockRng does not support fill_bytes")
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::distributions::Open01;

    #[test]
    fn test_replays_values_through_open01() {
        let mut rng = MockRng::new(vec![0.5, 0.125, 0.75]);
        for expected in [0.5, 0.125, 0.75] {
            let sampled: f64 = rng.sample(Open01);
            assert!((sampled - expected).abs() <= f64::EPSILON);
        }
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    #[should_panic(expected = "Ran out of values")]
    fn test_panics_when_exhausted() {
        let mut rng = MockRng::new(vec![0.5]);
        rng.next_u64();
        rng.next_u64();
    }
}
