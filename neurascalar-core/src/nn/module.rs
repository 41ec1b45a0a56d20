use crate::error::NeuraScalarError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// A module maps a slice of input values to a vector of output values by composing
/// scalar operations, and exposes its trainable leaves. It never updates them: computing a
/// loss and applying gradient steps is left to the caller.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// [`NeuraScalarError::DimensionMismatch`] if `input` does not have the expected width.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NeuraScalarError>;

    /// Returns every trainable leaf of the module, sub-modules included.
    fn parameters(&self) -> Vec<Value>;

    /// Returns the parameters with hierarchical names (e.g. `"layers.0.neurons.1.w.0"`),
    /// in the same order as [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Sets the gradient of every parameter to 0.
    ///
    /// Call this before each backward pass that reuses the parameters; `backward` itself
    /// never resets anything.
    fn zero_grad(&self) -> Result<(), NeuraScalarError> {
        for param in self.parameters() {
            param.zero_grad()?;
        }
        Ok(())
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Labels every parameter leaf with `prefix` followed by its name.
    fn label_parameters(&self, prefix: &str) -> Result<(), NeuraScalarError> {
        for (name, param) in self.named_parameters() {
            param.set_label(format!("{}{}", prefix, name))?;
        }
        Ok(())
    }
}

/// Checks that an input slice has the width a module expects.
pub(crate) fn check_input_width(expected: usize, input: &[Value]) -> Result<(), NeuraScalarError> {
    if input.len() != expected {
        return Err(NeuraScalarError::DimensionMismatch {
            expected,
            actual: input.len(),
        });
    }
    Ok(())
}
