use std::fmt;

//=====================================================================
// Outcome of one estimator run, paired with the analytic value it is
// compared against. The statistical helpers below use the analytic
// transmission p as the binomial success probability.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransmissionEstimate {
    pub count: usize,
    pub transmitted: usize,
    pub fraction: f64,
    pub expected: f64,
}

impl TransmissionEstimate {
    pub fn new(count: usize, transmitted: usize, expected: f64) -> Self {
        debug_assert!(count > 0 && transmitted <= count);
        Self {
            count,
            transmitted,
            fraction: transmitted as f64 / count as f64,
            expected,
        }
    }

    // sqrt(p (1 - p) / N)
    pub fn standard_error(&self) -> f64 {
        (self.expected * (1.0 - self.expected) / self.count as f64).sqrt()
    }

    pub fn deviation(&self) -> f64 {
        self.fraction - self.expected
    }

    // Deviation in units of the standard error. When p is 0 or 1 every trial has a certain outcome,
    // so the standard error vanishes and the score is reported as 0.
    pub fn z_score(&self) -> f64 {
        let standard_error = self.standard_error();
        if standard_error == 0.0 {
            0.0
        } else {
            self.deviation() / standard_error
        }
    }

    pub fn within_sigma(&self, k: f64) -> bool {
        self.deviation().abs() <= k * self.standard_error()
    }
}

impl fmt::Display for TransmissionEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulated transmission fraction: {:.4}", self.fraction)?;
        write!(f, "Expected (analytical) fraction:  {:.4}", self.expected)
    }
}
