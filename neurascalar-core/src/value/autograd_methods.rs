// src/value/autograd_methods.rs

use super::{with_graph, Value};
use crate::error::NeuraScalarError;

impl Value {
    /// Computes the gradient of `self` with respect to every value it depends on.
    ///
    /// Seeds `self.grad` to 1.0, then applies each node's local rule in reverse
    /// topological order. Gradients accumulate across calls: reset parameters with
    /// [`Value::zero_grad`] (or the whole subgraph with [`Value::zero_grad_all`]) before
    /// reusing them.
    ///
    /// # Errors
    /// [`NeuraScalarError::NodeNotFound`] if the handle was invalidated by [`Value::rewind`].
    pub fn backward(&self) -> Result<(), NeuraScalarError> {
        with_graph(|graph| graph.backward(self.id))
    }

    /// Resets this value's gradient to 0.
    pub fn zero_grad(&self) -> Result<(), NeuraScalarError> {
        with_graph(|graph| graph.zero_grad(self.id))
    }

    /// Resets the gradient of `self` and of every value it was derived from.
    pub fn zero_grad_all(&self) -> Result<(), NeuraScalarError> {
        with_graph(|graph| graph.zero_grad_all(self.id))
    }
}
