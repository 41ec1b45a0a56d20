use crate::error::NeuraScalarError;
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::Normal;

/// Initialization scheme for parameter leaves.
///
/// The default draws from `U(-1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std: f64 },
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform { low: -1.0, high: 1.0 }
    }
}

impl Init {
    /// Checks the scheme's parameters.
    ///
    /// # Errors
    /// [`NeuraScalarError::InvalidConfiguration`] for non-finite bounds, an empty uniform
    /// range (`low >= high`) or a negative standard deviation.
    pub fn validate(&self) -> Result<(), NeuraScalarError> {
        match *self {
            Init::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() || low >= high {
                    return Err(NeuraScalarError::InvalidConfiguration(format!(
                        "uniform init requires finite low < high, got [{}, {})",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(NeuraScalarError::InvalidConfiguration(format!(
                        "normal init requires a finite mean and std >= 0, got mean={} std={}",
                        mean, std
                    )));
                }
            }
            Init::Constant(value) => {
                if !value.is_finite() {
                    return Err(NeuraScalarError::InvalidConfiguration(format!(
                        "constant init requires a finite value, got {}",
                        value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws `count` values.
    pub fn sample_n<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<f64>, NeuraScalarError> {
        self.validate()?;
        let values = match *self {
            Init::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..count).map(|_| rng.sample(dist)).collect()
            }
            Init::Normal { mean, std } => {
                let dist = Normal::new(mean, std)
                    .map_err(|e| NeuraScalarError::InvalidConfiguration(format!("normal init: {}", e)))?;
                (0..count).map(|_| rng.sample(dist)).collect()
            }
            Init::Constant(value) => vec![value; count],
        };
        Ok(values)
    }

    /// Draws a single value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, NeuraScalarError> {
        let mut values = self.sample_n(1, rng)?;
        Ok(values.pop().unwrap_or_default())
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
