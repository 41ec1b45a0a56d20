use crate::autograd::{BackwardOp, ComputationGraph, NodeId};
use crate::error::NeuraScalarError;
use crate::ops::Operand;
use crate::value::Value;

// --- Forward Operation ---

/// Appends `tanh(a) = (e^{2a} - 1) / (e^{2a} + 1)`.
///
/// Evaluated with `f64::tanh`, which saturates to ±1 instead of overflowing to `NaN` for
/// large `|a|`.
pub fn tanh_op(graph: &mut ComputationGraph, a: impl Into<Operand>) -> Result<NodeId, NeuraScalarError> {
    let input = graph.resolve(a.into())?;
    let data = graph.data(input)?.tanh();
    Ok(graph.push(data, BackwardOp::Tanh { input }))
}

// --- Backward Operation ---

/// grad_in += (1 - t^2) * grad_out, with `t` the forward output.
pub(crate) fn tanh_backward(graph: &mut ComputationGraph, out_data: f64, out_grad: f64, input: NodeId) {
    graph.accumulate_grad(input, (1.0 - out_data * out_data) * out_grad);
}

impl Value {
    /// Hyperbolic tangent with gradient tracking.
    ///
    /// # Panics
    /// Panics if the handle was invalidated by [`Value::rewind`].
    pub fn tanh(self) -> Value {
        Value::record("tanh", |graph| tanh_op(graph, self))
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
