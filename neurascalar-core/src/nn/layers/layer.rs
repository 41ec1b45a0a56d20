use crate::error::NeuraScalarError;
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{check_input_width, Module};
use crate::value::Value;
use rand::Rng;

/// `nout` neurons reading the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    nin: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, NeuraScalarError> {
        let neurons = (0..nout)
            .map(|_| Neuron::new(nin, activation, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, nin })
    }

    /// Builds a layer from existing neurons, which must all take `nin` inputs.
    pub fn from_neurons(nin: usize, neurons: Vec<Neuron>) -> Result<Self, NeuraScalarError> {
        if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
            return Err(NeuraScalarError::DimensionMismatch {
                expected: nin,
                actual: bad.nin(),
            });
        }
        Ok(Layer { neurons, nin })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, NeuraScalarError> {
        check_input_width(self.nin, input)?;
        self.neurons.iter().map(|n| n.activate(input)).collect()
    }

    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
