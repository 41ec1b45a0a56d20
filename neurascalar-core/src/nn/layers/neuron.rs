use crate::error::NeuraScalarError;
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::module::{check_input_width, Module};
use crate::value::Value;
use rand::Rng;

/// A single unit: `act(b + Σ wᵢ·xᵢ)`.
///
/// Weights and bias are leaf values owned by the thread-local graph; gradients land on them
/// after `backward` on any output built from this neuron.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and a bias drawn from `init`.
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, NeuraScalarError> {
        let mut params = init.sample_n(nin + 1, rng)?;
        let bias = params.pop().unwrap_or_default();
        Ok(Neuron::from_weights(&params, bias, activation))
    }

    /// Creates a neuron with explicit parameters.
    pub fn from_weights(weights: &[f64], bias: f64, activation: Activation) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| Value::new(w)).collect(),
            bias: Value::new(bias),
            activation,
        }
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> Value {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    /// Computes the neuron's single output.
    pub fn activate(&self, input: &[Value]) -> Result<Value, NeuraScalarError> {
        check_input_width(self.nin(), input)?;
        let act = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias, |acc, (&w, &x)| acc + w * x);
        Ok(self.activation.apply(act))
    }
}

impl Module for Neuron {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NeuraScalarError> {
        Ok(vec![self.activate(input)?])
    }

    /// Weights first, then the bias.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("w.{}", i), w))
            .collect();
        named.push(("b".to_string(), self.bias));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
